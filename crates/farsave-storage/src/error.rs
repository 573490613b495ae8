//! Storage and transcoding error types

use std::io;

use farsave_formats::{ArchiveError, ResourceError};
use thiserror::Error;

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors from chunk storage and save transcoding
#[derive(Debug, Error)]
pub enum StorageError {
    /// Save folder has no chunk `0`
    #[error("save folder {folder} has no chunk 0")]
    MissingChunkZero {
        /// Folder probed for chunk files
        folder: String,
    },

    /// A chunk file existed but could not be read
    #[error("chunk {index} could not be read: {source}")]
    ChunkRead {
        /// Index of the unreadable chunk
        index: u32,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// No strategy located a level resource in the archive
    #[error("no level resource found in archive")]
    NoLevelResource,

    /// Chunk size that cannot partition a stream
    #[error("invalid chunk size: {0} bytes")]
    InvalidChunkSize(usize),

    /// Archive container failure
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Resource codec failure
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// I/O failure outside chunk reads
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
