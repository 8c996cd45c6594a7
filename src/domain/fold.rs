//! Folding ranges, one per project section with content

use serde::Serialize;

use super::document::Document;

/// Collapsible line range, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldRange {
    pub start: usize,
    pub end: usize,
}

/// Computes folding ranges from the header to the last non-blank body line.
///
/// The preamble and sections whose body is entirely blank get no range.
pub fn folding_ranges(doc: &Document) -> Vec<FoldRange> {
    doc.projects()
        .filter_map(|section| {
            let start = section.header_index()?;
            let end = section.last_content_line()?.index;
            (end > start).then_some(FoldRange { start, end })
        })
        .collect()
}
