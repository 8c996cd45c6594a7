//! Open-document tracking
//!
//! The workspace owns one [`ContextColorMap`] per open document. A map is
//! created when the document opens, reused on every change so colors stay
//! stable, and dropped when the document closes.
//!
//! Hosts call [`Workspace::on_document_changed`] from their own change
//! notifications; the workspace itself has no event loop.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{annotate, Annotations, ContextColorMap, Document, DocumentId, FoldRange};

#[derive(Debug, Error, PartialEq)]
pub enum WorkspaceError {
    #[error("Document is not open: {0}")]
    NotOpen(DocumentId),
}

/// Per-document state kept while a document is open
#[derive(Debug)]
struct OpenDocument {
    colors: ContextColorMap,
    text: String,
}

/// Registry of open documents
#[derive(Debug)]
pub struct Workspace {
    palette_size: usize,
    documents: HashMap<DocumentId, OpenDocument>,
}

impl Workspace {
    /// Creates a workspace whose color maps cycle through `palette_size` colors
    pub fn new(palette_size: usize) -> Self {
        Self {
            palette_size,
            documents: HashMap::new(),
        }
    }

    /// Opens a document and returns its first annotations.
    ///
    /// Reopening an already open document keeps its color map.
    pub fn open(&mut self, id: DocumentId, text: &str) -> Annotations {
        let palette_size = self.palette_size;
        let doc = self.documents.entry(id).or_insert_with(|| OpenDocument {
            colors: ContextColorMap::new(palette_size),
            text: String::new(),
        });
        doc.text = text.to_string();
        annotate(&Document::parse(&doc.text), &mut doc.colors)
    }

    /// Recomputes annotations after the document's text changed
    pub fn on_document_changed(
        &mut self,
        id: &DocumentId,
        text: &str,
    ) -> Result<Annotations, WorkspaceError> {
        let doc = self
            .documents
            .get_mut(id)
            .ok_or_else(|| WorkspaceError::NotOpen(id.clone()))?;

        doc.text = text.to_string();
        Ok(annotate(&Document::parse(&doc.text), &mut doc.colors))
    }

    /// Folding ranges for the last known text of an open document
    pub fn folding_ranges(&self, id: &DocumentId) -> Result<Vec<FoldRange>, WorkspaceError> {
        let doc = self
            .documents
            .get(id)
            .ok_or_else(|| WorkspaceError::NotOpen(id.clone()))?;
        Ok(crate::domain::folding_ranges(&Document::parse(&doc.text)))
    }

    /// Closes a document, discarding its colors. Returns false if it was not open.
    pub fn close(&mut self, id: &DocumentId) -> bool {
        self.documents.remove(id).is_some()
    }

    pub fn is_open(&self, id: &DocumentId) -> bool {
        self.documents.contains_key(id)
    }

    /// Number of open documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
