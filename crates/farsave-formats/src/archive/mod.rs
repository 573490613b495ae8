//! Save archive container seams
//!
//! The container's internal directory/FAT/hash-table layout is handled by an
//! external implementation; the transcoding layer consumes it through the
//! narrow interfaces in this module. Everything here is read-oriented except
//! [`ArchiveCodec::build`], which the encode path uses to produce a fresh
//! archive around a single level resource.

mod error;

pub use error::ArchiveError;

use farsave_crypto::Sha1Hash;

use crate::resource::{ResourceType, Revision};

/// Root resource key declared by a save archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootKey {
    /// Content hash of the root resource
    pub hash: Sha1Hash,
    /// Declared type of the root resource
    pub resource_type: ResourceType,
}

impl RootKey {
    /// A root key naming `hash` as a level resource
    pub fn level(hash: Sha1Hash) -> Self {
        Self {
            hash,
            resource_type: ResourceType::Level,
        }
    }
}

/// A parsed save archive handle
pub trait SaveArchive {
    /// The archive's declared root resource key
    fn root_key(&self) -> RootKey;

    /// Extract the bytes stored under `hash`, when present
    fn extract(&self, hash: Sha1Hash) -> Option<Vec<u8>>;

    /// Content hashes of every directory entry, in native enumeration order
    fn entry_hashes(&self) -> Vec<Sha1Hash>;
}

/// Parses and builds the archive container format
pub trait ArchiveCodec {
    /// Parse raw archive bytes into a handle
    fn parse(&self, data: &[u8]) -> Result<Box<dyn SaveArchive>, ArchiveError>;

    /// Build a new archive holding `resources`, declaring `root`, serialized
    /// for `revision`
    fn build(
        &self,
        root: RootKey,
        resources: &[Vec<u8>],
        revision: Revision,
    ) -> Result<Vec<u8>, ArchiveError>;
}
