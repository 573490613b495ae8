//! Archive container error types

use thiserror::Error;

/// Errors surfaced by the external archive container implementation
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Archive bytes do not form a valid container
    #[error("malformed archive: {0}")]
    Malformed(String),

    /// Archive ended before its declared directory
    #[error("archive truncated: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum byte count the container metadata promised
        expected: usize,
        /// Byte count actually available
        actual: usize,
    },

    /// Container revision the implementation does not support
    #[error("unsupported archive revision: {0}")]
    UnsupportedRevision(u32),
}
