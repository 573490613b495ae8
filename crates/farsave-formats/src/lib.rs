//! Format-level types and transforms for FAR4 save archive transcoding
//!
//! This crate owns the pieces of the save container format that are pure
//! data transforms or shared vocabulary, independent of any filesystem:
//!
//! - **far**: the split-container chunk representation, trailer detection
//!   and the per-chunk encrypt/decrypt transforms
//! - **resource**: the serialized-resource header (type sniffing, revision),
//!   the slot catalog model, and the trait seam to the external
//!   structured-text codec
//! - **archive**: the root key plus the trait seams to the external archive
//!   container implementation
//!
//! Driving these across whole folders of chunk files lives in
//! `farsave-storage`.

#![warn(missing_docs)]

pub mod archive;
pub mod far;
pub mod resource;

pub use archive::{ArchiveCodec, ArchiveError, RootKey, SaveArchive};
pub use far::{CHUNK_SIZE, TRAILER};
pub use resource::{
    ResourceCodec, ResourceError, ResourceType, Revision, SlotList,
};
