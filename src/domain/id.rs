//! Document identity
//!
//! ID format: `d-{7-char-hash}` (e.g., `d-7f2b4c1`), where the hash is
//! derived from the document's canonical path. The same file always gets
//! the same ID, so per-document state can be keyed on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid document ID format: expected 'd-{{7-char-hash}}', got '{0}'")]
    InvalidDocumentId(String),
}

/// Generates a 7-character hash from a document location
fn generate_hash(location: &str) -> String {
    let hash = blake3::hash(location.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Document ID in the format `d-{7-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId {
    hash: String,
}

impl DocumentId {
    /// Creates an ID for any document location (path, URI, buffer name)
    pub fn new(location: &str) -> Self {
        Self {
            hash: generate_hash(location),
        }
    }

    /// Creates an ID for a file, canonicalizing the path when it exists
    pub fn for_path(path: &Path) -> Self {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::new(&canonical.to_string_lossy())
    }

    /// Returns the hash portion of the ID
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d-{}", self.hash)
    }
}

impl FromStr for DocumentId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hash = s
            .strip_prefix("d-")
            .ok_or_else(|| IdError::InvalidDocumentId(s.to_string()))?;

        if hash.len() != 7 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::InvalidDocumentId(s.to_string()));
        }

        Ok(Self {
            hash: hash.to_string(),
        })
    }
}

impl TryFrom<String> for DocumentId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.to_string()
    }
}
