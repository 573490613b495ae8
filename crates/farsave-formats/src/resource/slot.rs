//! Save slot catalog model

use farsave_crypto::Sha1Hash;

/// Reference from a slot to its root resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceDescriptor {
    /// Content-addressed reference, resolvable inside the archive
    Hash(Sha1Hash),
    /// Opaque identifier resolved against installed game data, not the
    /// archive itself
    Guid(u32),
}

impl ResourceDescriptor {
    /// The content hash, when this reference is hash-addressed
    pub fn as_hash(&self) -> Option<Sha1Hash> {
        match self {
            Self::Hash(hash) => Some(*hash),
            Self::Guid(_) => None,
        }
    }
}

/// One save slot
#[derive(Debug, Clone, Default)]
pub struct Slot {
    /// Root resource of the slot's content
    pub root: Option<ResourceDescriptor>,
    /// Display name, when the save recorded one
    pub name: Option<String>,
}

/// Ordered catalog of save slots
#[derive(Debug, Clone, Default)]
pub struct SlotList {
    /// Slots in catalog order
    pub slots: Vec<Slot>,
}

impl SlotList {
    /// The first slot in catalog order, when any exist
    pub fn first(&self) -> Option<&Slot> {
        self.slots.first()
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_as_hash() {
        let hash = Sha1Hash::from_data(b"level");
        assert_eq!(ResourceDescriptor::Hash(hash).as_hash(), Some(hash));
        assert_eq!(ResourceDescriptor::Guid(0x2F00).as_hash(), None);
    }

    #[test]
    fn test_slot_list_first() {
        let list = SlotList::default();
        assert!(list.is_empty());
        assert!(list.first().is_none());

        let list = SlotList {
            slots: vec![
                Slot {
                    root: Some(ResourceDescriptor::Guid(1)),
                    name: Some("first".into()),
                },
                Slot::default(),
            ],
        };
        assert_eq!(list.len(), 2);
        let first = list.first().expect("non-empty list");
        assert_eq!(first.name.as_deref(), Some("first"));
    }
}
