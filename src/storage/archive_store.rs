//! Append-only archive sidecar
//!
//! Archived blocks are appended to a separate file next to the document.
//! The file is never truncated or rewritten.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

/// Store for archived Done items
pub struct ArchiveStore {
    path: PathBuf,
}

impl ArchiveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the archive file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a formatted archive block
    pub fn append(&self, block: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open archive: {}", self.path.display()))?;

        file.lock_exclusive()
            .context("Failed to acquire write lock on archive")?;

        let mut writer = BufWriter::new(&file);
        writer
            .write_all(block.as_bytes())
            .context("Failed to write archive block")?;
        writer.flush().context("Failed to flush archive")?;

        Ok(())
    }

    /// Reads the whole archive, empty if it does not exist yet
    pub fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read archive: {}", self.path.display()))
    }
}
