//! Per-chunk transforms between on-disk and in-stream representation

use farsave_crypto::XxteaCipher;

use super::{TRAILER, split_trailer};

/// One chunk after decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveChunk {
    /// Decrypted payload bytes
    pub data: Vec<u8>,
    /// Whether this chunk carried the end-of-stream trailer
    pub terminal: bool,
}

/// Decrypt one raw on-disk chunk.
///
/// A detected trailer is stripped before decryption and reported through
/// [`SaveChunk::terminal`]; trailer bytes never pass through the cipher.
pub fn decode_chunk(cipher: &XxteaCipher, raw: &[u8]) -> SaveChunk {
    let (body, trailer) = split_trailer(raw);
    SaveChunk {
        data: cipher.decrypt(body),
        terminal: trailer.is_some(),
    }
}

/// Encrypt one chunk for disk, appending the trailer when `terminal`.
pub fn encode_chunk(cipher: &XxteaCipher, plain: &[u8], terminal: bool) -> Vec<u8> {
    let mut out = cipher.encrypt(plain);
    if terminal {
        out.extend_from_slice(&TRAILER);
    }
    out
}
