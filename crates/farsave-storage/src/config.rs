//! Transcoding configuration

use std::path::PathBuf;

use farsave_formats::resource::Revision;

/// Locations a batch decode run reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeConfig {
    /// Directory scanned for level folders
    pub input_dir: PathBuf,
    /// Directory receiving one structured-text file per decoded level
    pub output_dir: PathBuf,
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Settings for building new archives on the encode path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Revision the rebuilt resources and archive are serialized for.
    ///
    /// There is deliberately no default; the revision must match the game
    /// the save is destined for.
    pub revision: Revision,
}

impl EncodeOptions {
    /// Options targeting `revision`
    pub fn for_revision(revision: Revision) -> Self {
        Self { revision }
    }
}
