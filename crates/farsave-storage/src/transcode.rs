//! Batch decode and single-shot encode drivers

use std::fs;
use std::path::{Path, PathBuf};

use farsave_crypto::{Sha1Hash, XxteaCipher};
use farsave_formats::archive::{ArchiveCodec, RootKey};
use farsave_formats::resource::ResourceCodec;
use tracing::{info, warn};

use crate::config::{EncodeOptions, TranscodeConfig};
use crate::error::{Result, StorageError};
use crate::resolver;
use crate::store::{self, DirChunkStore};

/// Aggregate outcome of a batch decode run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeSummary {
    /// Items exported successfully
    pub succeeded: usize,
    /// Items skipped or failed
    pub failed: usize,
}

/// Drives save archives between their on-disk chunk representation and
/// structured text, through the external archive and resource codecs.
pub struct SaveTranscoder<'a> {
    archive: &'a dyn ArchiveCodec,
    resources: &'a dyn ResourceCodec,
    cipher: XxteaCipher,
}

impl<'a> SaveTranscoder<'a> {
    /// Create a transcoder using the built-in save-archive key
    pub fn new(archive: &'a dyn ArchiveCodec, resources: &'a dyn ResourceCodec) -> Self {
        Self::with_cipher(archive, resources, XxteaCipher::with_save_key())
    }

    /// Create a transcoder over an explicit cipher
    pub fn with_cipher(
        archive: &'a dyn ArchiveCodec,
        resources: &'a dyn ResourceCodec,
        cipher: XxteaCipher,
    ) -> Self {
        Self {
            archive,
            resources,
            cipher,
        }
    }

    /// Decode every level folder under the configured input directory.
    ///
    /// A level folder is any direct subdirectory whose name contains
    /// `"LEVEL"`. Per-item failures are logged with the item name and
    /// counted; the run continues with the next item. A failed item leaves
    /// no output file behind.
    pub fn decode_all(&self, config: &TranscodeConfig) -> Result<TranscodeSummary> {
        fs::create_dir_all(&config.output_dir)?;

        let mut folders: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&config.input_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.contains("LEVEL") {
                folders.push((name, path));
            }
        }
        folders.sort();
        info!("found {} level folder(s)", folders.len());

        let mut summary = TranscodeSummary::default();
        for (name, folder) in folders {
            match self.decode_folder(&folder) {
                Ok(text) => {
                    let out_path = config.output_dir.join(format!("{name}.json"));
                    match fs::write(&out_path, text) {
                        Ok(()) => {
                            info!("{} -> {}", name, out_path.display());
                            summary.succeeded += 1;
                        }
                        Err(err) => {
                            // A half-written export is worse than none
                            let _ = fs::remove_file(&out_path);
                            warn!("{}: writing output failed: {}", name, err);
                            summary.failed += 1;
                        }
                    }
                }
                Err(err) => {
                    warn!("{}: {}", name, err);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "done: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        );
        Ok(summary)
    }

    /// Decode one level folder to structured text.
    pub fn decode_folder(&self, folder: &Path) -> Result<String> {
        let chunks = DirChunkStore::new(folder);
        let archive_data = store::reassemble(&chunks, &self.cipher)?.ok_or_else(|| {
            StorageError::MissingChunkZero {
                folder: folder.display().to_string(),
            }
        })?;

        let archive = self.archive.parse(&archive_data)?;
        let level = resolver::resolve_level(archive.as_ref(), self.resources)
            .ok_or(StorageError::NoLevelResource)?;

        info!("resolved level {} ({} bytes)", level.hash, level.data.len());
        Ok(self.resources.level_to_text(&level.data)?)
    }

    /// Encode structured text into a folder of encrypted chunk files.
    ///
    /// Builds a fresh archive whose root is the rebuilt level resource,
    /// keyed by its content hash. Returns the number of chunks written.
    /// Unlike the batch decode path, any failure here is terminal.
    pub fn encode(&self, text: &str, out_dir: &Path, options: &EncodeOptions) -> Result<u32> {
        let level = self.resources.level_from_text(text, options.revision)?;
        let hash = Sha1Hash::from_data(&level);
        info!("level resource: {} bytes, {}", level.len(), hash);

        let root = RootKey::level(hash);
        let archive_data = self.archive.build(root, &[level], options.revision)?;

        let mut sink = DirChunkStore::create(out_dir)?;
        let written = store::split(&archive_data, &mut sink, &self.cipher)?;
        info!("wrote {} chunk(s) to {}", written, out_dir.display());
        Ok(written)
    }
}
