//! Cryptographic operations for FAR4 save archive transcoding
//!
//! This crate provides the two primitives the save container format relies
//! on: XXTEA chunk encryption and SHA-1 content hashing.
//!
//! # Components
//!
//! - **Hashing**: SHA-1 digests identify resources inside an archive
//! - **Encryption**: XXTEA block cipher protects on-disk save chunks
//!
//! # Examples
//!
//! ## Content Hashing
//!
//! ```
//! use farsave_crypto::Sha1Hash;
//!
//! let data = b"Hello, World!";
//! let hash = Sha1Hash::from_data(data);
//! println!("Resource hash: {}", hash);
//! ```
//!
//! ## Chunk Encryption
//!
//! ```
//! use farsave_crypto::XxteaCipher;
//!
//! let cipher = XxteaCipher::with_save_key();
//! let encrypted = cipher.encrypt(b"chunk payload bytes");
//! let decrypted = cipher.decrypt(&encrypted);
//! assert_eq!(decrypted, b"chunk payload bytes");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod sha1;
pub mod xxtea;

pub use error::CryptoError;

// Re-export commonly used types
pub use sha1::Sha1Hash;
pub use xxtea::{SAVE_ARCHIVE_KEY, XxteaCipher};
