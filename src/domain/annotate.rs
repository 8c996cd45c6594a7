//! Highlight spans for a rendering layer
//!
//! Annotations are recomputed from scratch on every call. The only state
//! carried between calls is the document's [`ContextColorMap`].

use serde::Serialize;

use super::color::ContextColorMap;
use super::document::Document;

/// A character range on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }
}

/// Spans for every occurrence of one context label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSpans {
    pub context: String,
    /// Palette index assigned to the context
    pub color: usize,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    /// Whole-line spans of project headers
    pub headers: Vec<Span>,

    /// Whole-line spans of non-blank lines inside the Done section
    pub done_items: Vec<Span>,

    /// Context label spans, grouped by context in first-seen order
    pub contexts: Vec<ContextSpans>,
}

impl Annotations {
    /// Spans for a single context
    pub fn spans_for(&self, context: &str) -> Option<&ContextSpans> {
        self.contexts.iter().find(|c| c.context == context)
    }
}

/// Walks a document and collects every highlight span
pub fn annotate(doc: &Document, colors: &mut ContextColorMap) -> Annotations {
    let mut annotations = Annotations::default();

    for section in &doc.sections {
        if let Some(header) = &section.header {
            annotations
                .headers
                .push(Span::new(header.index, 0, header.width()));
        }

        for line in &section.lines {
            if section.is_done && !line.is_blank() {
                annotations
                    .done_items
                    .push(Span::new(line.index, 0, line.width()));
            }

            let (Some(context), Some((start, end))) = (&line.context, line.context_columns())
            else {
                continue;
            };

            let color = colors.color_for(context);
            let span = Span::new(line.index, start, end);

            match annotations.contexts.iter_mut().find(|c| &c.context == context) {
                Some(group) => group.spans.push(span),
                None => annotations.contexts.push(ContextSpans {
                    context: context.clone(),
                    color,
                    spans: vec![span],
                }),
            }
        }
    }

    annotations
}
