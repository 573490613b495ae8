//! Seam to the external resource object model codec

use super::error::ResourceError;
use super::revision::Revision;
use super::slot::SlotList;

/// Structured-text codec over the resource object model.
///
/// Field-level serialization of game resources lives outside this workspace;
/// the transcoding layer only needs these three entry points. Implementations
/// are expected to be stateless and cheap to share by reference.
pub trait ResourceCodec {
    /// Decode a serialized slot list resource into the slot catalog
    fn read_slot_list(&self, data: &[u8]) -> Result<SlotList, ResourceError>;

    /// Render a serialized level resource as structured text
    fn level_to_text(&self, data: &[u8]) -> Result<String, ResourceError>;

    /// Rebuild level resource bytes from structured text at `revision`
    fn level_from_text(&self, text: &str, revision: Revision) -> Result<Vec<u8>, ResourceError>;
}
