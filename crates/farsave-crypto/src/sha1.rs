//! SHA-1 content hashing for archive resources

use sha1::{Digest, Sha1};
use std::fmt;

/// 160-bit content hash identifying a resource inside a save archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha1Hash([u8; 20]);

impl Sha1Hash {
    /// Create a hash from raw bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Create a hash from data by computing its SHA-1 digest
    pub fn from_data(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        let result = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&result);
        Self(bytes)
    }

    /// Parse a hash from a 40-character hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Sha1Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_from_data() {
        let hash = Sha1Hash::from_data(b"abc");
        assert_eq!(hash.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_hash_of_empty_input() {
        let hash = Sha1Hash::from_data(b"");
        assert_eq!(hash.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_hash_from_hex() {
        let hex = "a9993e364706816aba3e25717850c26c9cd0d89d";
        let hash = Sha1Hash::from_hex(hex).expect("valid hex string");
        assert_eq!(hash.to_hex(), hex);
        assert_eq!(hash, Sha1Hash::from_data(b"abc"));
    }

    #[test]
    fn test_hash_from_invalid_hex() {
        assert!(Sha1Hash::from_hex("zz").is_err());
        assert!(Sha1Hash::from_hex("a9993e").is_err());
    }

    #[test]
    fn test_display_matches_hex() {
        let hash = Sha1Hash::from_data(b"display me");
        assert_eq!(format!("{hash}"), hash.to_hex());
    }
}
