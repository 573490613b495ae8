//! Serialized resource model: type sniffing, revisions, and the slot catalog
//!
//! The field-level resource serializer is an external collaborator; this
//! module owns only what the transcoding layer itself needs to see: the
//! common resource header (enough to sniff a type and read the revision a
//! resource was serialized with), the slot catalog data model, and the trait
//! seam to the structured-text codec.

mod codec;
mod error;
mod header;
mod revision;
mod slot;

pub use codec::ResourceCodec;
pub use error::ResourceError;
pub use header::{ResourceHeader, ResourceType, SerializationMethod, sniff_type};
pub use revision::Revision;
pub use slot::{ResourceDescriptor, Slot, SlotList};
