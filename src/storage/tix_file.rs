//! `.tix` document files
//!
//! Reads whole documents and replaces them atomically (temp file + rename),
//! holding an exclusive lock on the temp file while it is written.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{Document, DocumentId};

/// A `.tix` document on disk
pub struct TixFile {
    path: PathBuf,
}

impl TixFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identity of this document
    pub fn id(&self) -> DocumentId {
        DocumentId::for_path(&self.path)
    }

    /// Reads the full document text
    pub fn read(&self) -> Result<String> {
        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open document: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on document")?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .with_context(|| format!("Failed to read document: {}", self.path.display()))?;

        Ok(text)
    }

    /// Reads and parses the document
    pub fn parse(&self) -> Result<Document> {
        Ok(Document::parse(&self.read()?))
    }

    /// Replaces the document text
    pub fn write(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on document")?;

            let mut writer = BufWriter::new(&file);
            writer
                .write_all(text.as_bytes())
                .context("Failed to write document")?;
            writer.flush().context("Failed to flush document")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
