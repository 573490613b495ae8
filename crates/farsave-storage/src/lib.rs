//! On-disk save transcoding: chunk store, level resolution, batch drivers
//!
//! This crate drives the format primitives from `farsave-formats` across
//! real save data:
//!
//! - **store**: numbered-chunk directories to and from one logical archive
//!   byte stream, behind filesystem-agnostic source/sink traits
//! - **resolver**: the layered search for the level payload inside a parsed
//!   archive
//! - **transcode**: the batch decode and single-shot encode drivers,
//!   wired to the external archive and resource codecs through their trait
//!   seams
//!
//! Everything is synchronous, blocking, and single-threaded; items are
//! processed strictly in sequence, and per-item decode failures are counted
//! rather than aborting the run.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod resolver;
pub mod store;
pub mod transcode;

pub use config::{EncodeOptions, TranscodeConfig};
pub use error::{Result, StorageError};
pub use resolver::{ResolvedLevel, resolve_level};
pub use store::{ChunkSink, ChunkSource, DirChunkStore};
pub use transcode::{SaveTranscoder, TranscodeSummary};
