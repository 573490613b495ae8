//! Error types for cryptographic operations

use thiserror::Error;

/// Errors that can occur during cryptographic operations
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid key size
    #[error("invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize {
        /// Expected key size in bytes
        expected: usize,
        /// Actual key size in bytes
        actual: usize,
    },

    /// Invalid hash encoding
    #[error("invalid hash encoding: {0}")]
    InvalidHash(#[from] hex::FromHexError),
}

impl From<crate::xxtea::XxteaError> for CryptoError {
    fn from(err: crate::xxtea::XxteaError) -> Self {
        match err {
            crate::xxtea::XxteaError::InvalidKeyLength(actual) => Self::InvalidKeySize {
                expected: 16,
                actual,
            },
        }
    }
}
