//! XXTEA (corrected block TEA) cipher implementation for save chunk encryption.
//!
//! PS3 save archives encrypt every chunk with XXTEA under a fixed, well-known
//! key. The cipher operates on the data as a sequence of little-endian 32-bit
//! words; because chunk lengths are arbitrary, only the 32-bit aligned prefix
//! of a buffer is transformed and any trailing partial word passes through
//! unchanged. Buffers shorter than eight bytes (fewer than two words) also
//! pass through unchanged. This keeps the transform length-preserving, which
//! the chunk split/reassemble round trip depends on.
//!
//! ## Security Warning
//!
//! XXTEA has published weaknesses and the save key is public knowledge. This
//! implementation exists solely for compatibility with the save container
//! format, not for protecting new data.
//!
//! ## Usage
//!
//! ```rust
//! use farsave_crypto::xxtea::XxteaCipher;
//!
//! let cipher = XxteaCipher::with_save_key();
//! let plaintext = b"Hello, World!";
//! let ciphertext = cipher.encrypt(plaintext);
//! let decrypted = cipher.decrypt(&ciphertext);
//! assert_eq!(plaintext, &decrypted[..]);
//! ```

use thiserror::Error;

/// The well-known 128-bit key used for save archive chunks.
pub const SAVE_ARCHIVE_KEY: [u8; 16] = [
    0x2A, 0xFC, 0x5D, 0x1C, 0x79, 0x62, 0x30, 0x8E, 0xD1, 0x4B, 0x47, 0xA5, 0x66, 0x0B, 0xE8, 0x93,
];

/// XXTEA magic constant (golden-ratio derived, shared with TEA/XTEA).
const DELTA: u32 = 0x9E37_79B9;

/// Errors that can occur during XXTEA operations.
#[derive(Debug, Error)]
pub enum XxteaError {
    /// Invalid key length provided
    #[error("invalid key length: {0} (must be exactly 16 bytes)")]
    InvalidKeyLength(usize),
}

/// XXTEA block cipher keyed for save archive chunks.
///
/// Unlike a stream cipher there is no internal position state; the same
/// instance can encrypt and decrypt any number of buffers.
pub struct XxteaCipher {
    /// 128-bit key as four little-endian words
    key: [u32; 4],
}

impl XxteaCipher {
    /// Create a cipher from a 16-byte key.
    ///
    /// # Errors
    ///
    /// Returns `XxteaError::InvalidKeyLength` if the key is not exactly
    /// 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self, XxteaError> {
        if key.len() != 16 {
            return Err(XxteaError::InvalidKeyLength(key.len()));
        }
        let mut words = [0u32; 4];
        for (word, bytes) in words.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Ok(Self { key: words })
    }

    /// Create a cipher keyed with [`SAVE_ARCHIVE_KEY`].
    pub fn with_save_key() -> Self {
        let mut words = [0u32; 4];
        for (word, bytes) in words.iter_mut().zip(SAVE_ARCHIVE_KEY.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Self { key: words }
    }

    /// Encrypt a buffer.
    ///
    /// The aligned word prefix is transformed; any sub-word tail is copied
    /// through verbatim. Output length always equals input length.
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        self.apply(data, true)
    }

    /// Decrypt a buffer previously produced by [`encrypt`](Self::encrypt)
    /// under the same key.
    pub fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        self.apply(data, false)
    }

    fn apply(&self, data: &[u8], encrypt: bool) -> Vec<u8> {
        let word_count = data.len() / 4;
        if word_count < 2 {
            return data.to_vec();
        }

        let aligned = word_count * 4;
        let mut words: Vec<u32> = data[..aligned]
            .chunks_exact(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();

        if encrypt {
            self.encrypt_words(&mut words);
        } else {
            self.decrypt_words(&mut words);
        }

        let mut out = Vec::with_capacity(data.len());
        for word in &words {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(&data[aligned..]);
        out
    }

    fn encrypt_words(&self, v: &mut [u32]) {
        let n = v.len();
        let rounds = 6 + 52 / n;
        let mut sum: u32 = 0;
        let mut z = v[n - 1];
        for _ in 0..rounds {
            sum = sum.wrapping_add(DELTA);
            let e = ((sum >> 2) & 3) as usize;
            for p in 0..n {
                let y = v[(p + 1) % n];
                v[p] = v[p].wrapping_add(Self::mx(self.key, y, z, sum, p, e));
                z = v[p];
            }
        }
    }

    fn decrypt_words(&self, v: &mut [u32]) {
        let n = v.len();
        let rounds = 6 + 52 / n;
        let mut sum: u32 = (rounds as u32).wrapping_mul(DELTA);
        let mut y = v[0];
        for _ in 0..rounds {
            let e = ((sum >> 2) & 3) as usize;
            for p in (0..n).rev() {
                let z = v[(p + n - 1) % n];
                v[p] = v[p].wrapping_sub(Self::mx(self.key, y, z, sum, p, e));
                y = v[p];
            }
            sum = sum.wrapping_sub(DELTA);
        }
    }

    /// The XXTEA mixing function from the reference description.
    #[inline]
    fn mx(key: [u32; 4], y: u32, z: u32, sum: u32, p: usize, e: usize) -> u32 {
        (((z >> 5) ^ (y << 2)).wrapping_add((y >> 3) ^ (z << 4)))
            ^ ((sum ^ y).wrapping_add(key[(p & 3) ^ e] ^ z))
    }
}
