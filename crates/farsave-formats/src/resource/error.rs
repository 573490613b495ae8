//! Resource model error types

use thiserror::Error;

/// Errors from resource header parsing and codec collaborators
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Unknown resource type magic
    #[error("unknown resource magic: {0:02X?}")]
    UnknownMagic([u8; 3]),

    /// Malformed slot list payload
    #[error("malformed slot list: {0}")]
    MalformedSlotList(String),

    /// Malformed structured text payload
    #[error("malformed structured text: {0}")]
    MalformedText(String),

    /// Serialization revision the codec cannot handle
    #[error("unsupported resource revision {0:#x}")]
    UnsupportedRevision(u32),

    /// Binary parsing error
    #[error("binary parsing error: {0}")]
    BinRw(#[from] binrw::Error),
}
