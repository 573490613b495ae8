//! FAR4 split save container primitives
//!
//! A save archive is stored on disk as a folder of numbered chunk files
//! (`0`, `1`, `2`, …). Every chunk is XXTEA-encrypted payload; the terminal
//! chunk additionally carries a 4-byte unencrypted trailer after its
//! ciphertext, marking end-of-stream. This module provides the per-chunk
//! transforms between the on-disk and in-stream representations; driving
//! them across a whole folder lives in `farsave-storage`.

mod chunk;

pub use chunk::{SaveChunk, decode_chunk, encode_chunk};

/// End-of-stream marker appended, unencrypted, after the terminal chunk's
/// ciphertext ("FAR4").
pub const TRAILER: [u8; 4] = [0x46, 0x41, 0x52, 0x34];

/// Maximum plaintext size of a single chunk.
pub const CHUNK_SIZE: usize = 0xE000;

/// True when `data` ends with the trailer magic.
///
/// Payload bytes that coincidentally end in the magic are indistinguishable
/// from a genuine trailer; callers inherit that ambiguity. The container
/// format offers no way to disambiguate, so none is attempted here.
pub fn has_trailer(data: &[u8]) -> bool {
    data.len() >= TRAILER.len() && data[data.len() - TRAILER.len()..] == TRAILER
}

/// Split `data` into its body and a detected trailer.
pub fn split_trailer(data: &[u8]) -> (&[u8], Option<&[u8]>) {
    if has_trailer(data) {
        let cut = data.len() - TRAILER.len();
        (&data[..cut], Some(&data[cut..]))
    } else {
        (data, None)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trailer_is_far4() {
        assert_eq!(&TRAILER, b"FAR4");
    }

    #[test]
    fn test_has_trailer_detection() {
        assert!(has_trailer(b"FAR4"));
        assert!(has_trailer(b"payloadFAR4"));
        assert!(!has_trailer(b"FAR"));
        assert!(!has_trailer(b""));
        assert!(!has_trailer(b"FAR4x"));
        assert!(!has_trailer(b"payload"));
    }

    #[test]
    fn test_split_trailer_present() {
        let (body, trailer) = split_trailer(b"payloadFAR4");
        assert_eq!(body, b"payload");
        assert_eq!(trailer, Some(&b"FAR4"[..]));
    }

    #[test]
    fn test_split_trailer_absent() {
        let (body, trailer) = split_trailer(b"payload");
        assert_eq!(body, b"payload");
        assert_eq!(trailer, None);
    }

    #[test]
    fn test_split_trailer_only() {
        // A 4-byte chunk that is nothing but the trailer has an empty body
        let (body, trailer) = split_trailer(b"FAR4");
        assert!(body.is_empty());
        assert_eq!(trailer, Some(&b"FAR4"[..]));
    }
}
