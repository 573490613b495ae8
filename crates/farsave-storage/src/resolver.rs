//! Level resource resolution
//!
//! Locates the single level payload a save archive contains. Real-world
//! archives vary in how the level is referenced: indirectly through a slot
//! catalog, directly as the root, or (in malformed and legacy saves) not
//! discoverably at all, so resolution is layered, ending in a full
//! directory scan.

use farsave_crypto::Sha1Hash;
use farsave_formats::archive::SaveArchive;
use farsave_formats::resource::{self, ResourceCodec, ResourceType};
use tracing::{debug, warn};

/// A level resource located inside an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLevel {
    /// Content hash the level is stored under
    pub hash: Sha1Hash,
    /// Serialized level resource bytes
    pub data: Vec<u8>,
}

/// Locate the level payload of `archive`.
///
/// Strategies, first success wins: slot-list indirection when the root is a
/// slot catalog, the root itself when it is a level, then a linear scan of
/// the directory sniffing each entry's content. Returns `None` when all
/// three come up empty.
pub fn resolve_level(
    archive: &dyn SaveArchive,
    codec: &dyn ResourceCodec,
) -> Option<ResolvedLevel> {
    let root = archive.root_key();
    debug!("root resource {} ({:?})", root.hash, root.resource_type);

    let declared = match root.resource_type {
        ResourceType::SlotList => resolve_via_slot_list(archive, codec, root.hash),
        ResourceType::Level => archive.extract(root.hash).map(|data| ResolvedLevel {
            hash: root.hash,
            data,
        }),
        _ => None,
    };

    declared.or_else(|| scan_directory(archive))
}

/// Follow a slot-catalog root to the level its first slot references.
///
/// A catalog that fails to decode is treated the same as an absent one: the
/// caller falls through to the directory scan.
fn resolve_via_slot_list(
    archive: &dyn SaveArchive,
    codec: &dyn ResourceCodec,
    root_hash: Sha1Hash,
) -> Option<ResolvedLevel> {
    let data = archive.extract(root_hash)?;
    let slot_list = match codec.read_slot_list(&data) {
        Ok(list) => list,
        Err(err) => {
            warn!("slot list at {} did not decode: {}", root_hash, err);
            return None;
        }
    };

    let slot = slot_list.first()?;
    // GUID references point at installed game data, not archive content
    let hash = slot.root?.as_hash()?;
    debug!("first slot references level {}", hash);

    let data = archive.extract(hash)?;
    Some(ResolvedLevel { hash, data })
}

/// Last resort: extract every directory entry and sniff its content.
fn scan_directory(archive: &dyn SaveArchive) -> Option<ResolvedLevel> {
    for hash in archive.entry_hashes() {
        let Some(data) = archive.extract(hash) else {
            continue;
        };
        if resource::sniff_type(&data) == Some(ResourceType::Level) {
            debug!("directory scan found level {}", hash);
            return Some(ResolvedLevel { hash, data });
        }
    }
    None
}
