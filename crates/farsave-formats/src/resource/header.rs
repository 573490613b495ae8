//! Serialized resource headers and type sniffing

use std::io::Cursor;

use binrw::BinRead;

use super::error::ResourceError;

/// Resource types the transcoding layer can encounter
///
/// Dispatch over this enum is always a closed match; types with no explicit
/// handling route to the resolver's fallback scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// Playable level ("LVL")
    Level,
    /// Save slot catalog ("SLT")
    SlotList,
    /// Object plan ("PLN")
    Plan,
    /// Texture ("TEX")
    Texture,
    /// Mesh ("MSH")
    Mesh,
}

impl ResourceType {
    /// Parse a resource type from its serialized 3-byte magic
    pub fn from_magic(magic: &[u8; 3]) -> Option<Self> {
        match magic {
            b"LVL" => Some(Self::Level),
            b"SLT" => Some(Self::SlotList),
            b"PLN" => Some(Self::Plan),
            b"TEX" => Some(Self::Texture),
            b"MSH" => Some(Self::Mesh),
            _ => None,
        }
    }

    /// Get the serialized 3-byte magic
    pub fn magic(self) -> [u8; 3] {
        match self {
            Self::Level => *b"LVL",
            Self::SlotList => *b"SLT",
            Self::Plan => *b"PLN",
            Self::Texture => *b"TEX",
            Self::Mesh => *b"MSH",
        }
    }
}

/// How a resource body is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SerializationMethod {
    /// Binary serialization (method 'b')
    Binary = b'b',
    /// Text serialization (method 't')
    Text = b't',
    /// Encrypted binary serialization (method 'e')
    Encrypted = b'e',
}

impl SerializationMethod {
    /// Parse serialization method from byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'b' => Some(Self::Binary),
            b't' => Some(Self::Text),
            b'e' => Some(Self::Encrypted),
            _ => None,
        }
    }

    /// Get the byte representation
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Common header at the front of every serialized resource
///
/// Layout: 3-byte type magic, serialization method byte, then the big-endian
/// head revision the resource was serialized with.
#[derive(Debug, Clone, BinRead)]
#[br(big)]
pub struct ResourceHeader {
    /// Three-letter type magic
    pub magic: [u8; 3],
    /// Serialization method byte
    pub method: u8,
    /// Head revision the resource was serialized with
    pub revision: u32,
}

impl ResourceHeader {
    /// Parse the header from the front of a serialized resource
    pub fn parse(data: &[u8]) -> Result<Self, ResourceError> {
        let mut cursor = Cursor::new(data);
        Ok(Self::read(&mut cursor)?)
    }

    /// The resource type named by the magic, when recognized
    pub fn resource_type(&self) -> Option<ResourceType> {
        ResourceType::from_magic(&self.magic)
    }

    /// The serialization method, when recognized
    pub fn serialization(&self) -> Option<SerializationMethod> {
        SerializationMethod::from_byte(self.method)
    }
}

/// Sniff the resource type from the content of a serialized resource.
///
/// Returns `None` for buffers too short to carry a header or with an
/// unrecognized magic.
pub fn sniff_type(data: &[u8]) -> Option<ResourceType> {
    ResourceHeader::parse(data).ok().and_then(|h| h.resource_type())
}
