//! Line classification
//!
//! Every line of a `.tix` document falls into exactly one [`LineKind`]:
//!
//! - `ProjectHeader` - trimmed text longer than one character ending in `:`
//! - `ContextItem` - `<context> - <text>`, split at the first `-` that has
//!   whitespace on both sides
//! - `Blank` - nothing but whitespace
//! - `Plain` - anything else
//!
//! Classification is total: every string maps to some kind.

use serde::Serialize;

/// Kind of a classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    ProjectHeader,
    ContextItem,
    Blank,
    Plain,
}

/// A single line of raw text and what it was classified as
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Zero-based line index in the document
    pub index: usize,

    pub kind: LineKind,

    /// The original text, untouched
    pub raw: String,

    /// Leading whitespace length, in characters
    pub indent: usize,

    /// Context label (only for context items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Text after the separator (only for context items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_text: Option<String>,
}

impl Line {
    /// Classifies a raw line at the given document index
    pub fn classify(index: usize, raw: &str) -> Self {
        let trimmed = raw.trim();
        let rest = raw.trim_start();
        let indent = raw.chars().count() - rest.chars().count();

        let mut line = Self {
            index,
            kind: LineKind::Plain,
            raw: raw.to_string(),
            indent,
            context: None,
            item_text: None,
        };

        if trimmed.is_empty() {
            line.kind = LineKind::Blank;
        } else if is_header_text(trimmed) {
            line.kind = LineKind::ProjectHeader;
        } else if let Some((context, text)) = split_context(rest) {
            line.kind = LineKind::ContextItem;
            line.context = Some(context.to_string());
            line.item_text = Some(text.to_string());
        }

        line
    }

    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }

    pub fn is_header(&self) -> bool {
        self.kind == LineKind::ProjectHeader
    }

    /// Trimmed text of the line
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }

    /// Character length of the raw text
    pub fn width(&self) -> usize {
        self.raw.chars().count()
    }

    /// Column range covered by the context label, excluding indentation and separator
    pub fn context_columns(&self) -> Option<(usize, usize)> {
        self.context
            .as_ref()
            .map(|c| (self.indent, self.indent + c.chars().count()))
    }
}

/// Returns true if trimmed text is a project header
fn is_header_text(trimmed: &str) -> bool {
    trimmed.chars().count() > 1 && trimmed.ends_with(':')
}

/// Splits `<context> - <text>` at the first separator.
///
/// A separator is a `-` with a whitespace character on each side; those two
/// characters belong to the separator. `text` must already have its
/// indentation removed. The context is trimmed and must be non-empty.
fn split_context(text: &str) -> Option<(&str, &str)> {
    let mut chars = text.char_indices().peekable();
    let mut prev: Option<(usize, char)> = None;

    while let Some((at, c)) = chars.next() {
        if c == '-' {
            if let (Some((before, p)), Some(&(after, n))) = (prev, chars.peek()) {
                let context = text[..before].trim();
                if p.is_whitespace() && n.is_whitespace() && !context.is_empty() {
                    return Some((context, &text[after + n.len_utf8()..]));
                }
            }
        }
        prev = Some((at, c));
    }

    None
}

/// Extracts the context label of a raw line, if it has one.
///
/// Headers never carry a context, even if they contain a separator.
pub fn context_of(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_header_text(trimmed) {
        return None;
    }
    split_context(raw.trim_start()).map(|(context, _)| context)
}
