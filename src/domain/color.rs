//! Context color assignment
//!
//! Contexts get palette indices in the order they are first seen, wrapping
//! around once the palette is exhausted. A map lives as long as the document
//! it belongs to is open, so colors stay put while the text is edited.

use std::collections::HashMap;

/// Default palette used when no configuration overrides it
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#e06c75", "#98c379", "#e5c07b", "#61afef", "#c678dd", "#56b6c2", "#d19a66", "#be5046",
];

/// Stable mapping from context name to palette index
#[derive(Debug, Clone)]
pub struct ContextColorMap {
    palette_size: usize,
    assigned: HashMap<String, usize>,
}

impl ContextColorMap {
    /// Creates an empty map for a palette of the given size (at least one color)
    pub fn new(palette_size: usize) -> Self {
        Self {
            palette_size: palette_size.max(1),
            assigned: HashMap::new(),
        }
    }

    /// Returns the palette index for a context, assigning the next one if unseen
    pub fn color_for(&mut self, context: &str) -> usize {
        if let Some(&index) = self.assigned.get(context) {
            return index;
        }

        let index = self.assigned.len() % self.palette_size;
        self.assigned.insert(context.to_string(), index);
        index
    }

    /// Looks up an index without assigning one
    pub fn get(&self, context: &str) -> Option<usize> {
        self.assigned.get(context).copied()
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Number of contexts seen so far
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for ContextColorMap {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.len())
    }
}
