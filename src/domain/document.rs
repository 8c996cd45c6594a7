//! Document parsing
//!
//! A document is split on `\n` into lines, and the lines are grouped into
//! sections. Each project header opens a new section that runs until the
//! next header. Lines before the first header form an untitled preamble.
//!
//! Parsing never fails and never drops or reorders a line, so
//! [`Document::to_text`] reproduces the input byte for byte.

use serde::Serialize;

use super::line::Line;

/// Title of the completed-items section
pub const DONE_TITLE: &str = "Done:";

/// A run of lines under one header (or the preamble before any header)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Trimmed header text, empty for the preamble
    pub title: String,

    /// The header line itself (`None` for the preamble)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Line>,

    pub is_done: bool,

    /// Body lines, excluding the header
    pub lines: Vec<Line>,
}

impl Section {
    fn preamble() -> Self {
        Self {
            title: String::new(),
            header: None,
            is_done: false,
            lines: Vec::new(),
        }
    }

    fn opened_by(header: Line) -> Self {
        let title = header.trimmed().to_string();
        Self {
            is_done: title == DONE_TITLE,
            title,
            header: Some(header),
            lines: Vec::new(),
        }
    }

    pub fn is_preamble(&self) -> bool {
        self.header.is_none()
    }

    /// Line index of the header, if any
    pub fn header_index(&self) -> Option<usize> {
        self.header.as_ref().map(|h| h.index)
    }

    /// Last body line that is not blank
    pub fn last_content_line(&self) -> Option<&Line> {
        self.lines.iter().rev().find(|l| !l.is_blank())
    }

    /// Header followed by the body, in document order
    pub fn all_lines(&self) -> impl Iterator<Item = &Line> {
        self.header.iter().chain(self.lines.iter())
    }
}

/// A parsed `.tix` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub sections: Vec<Section>,
    pub line_count: usize,
}

impl Document {
    /// Parses a full document text
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    /// Parses an ordered sequence of raw lines
    pub fn from_lines<'a>(raw_lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        let mut current: Option<Section> = None;
        let mut line_count = 0;

        for (index, raw) in raw_lines.into_iter().enumerate() {
            line_count = index + 1;
            let line = Line::classify(index, raw);

            if line.is_header() {
                if let Some(done) = current.take() {
                    sections.push(done);
                }
                current = Some(Section::opened_by(line));
            } else {
                current.get_or_insert_with(Section::preamble).lines.push(line);
            }
        }

        if let Some(last) = current {
            sections.push(last);
        }

        Self {
            sections,
            line_count,
        }
    }

    /// All lines in document order, headers included
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(Section::all_lines)
    }

    /// The first section titled exactly `Done:`
    pub fn done_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.is_done)
    }

    /// The untitled section before the first header, if present
    pub fn preamble(&self) -> Option<&Section> {
        self.sections.first().filter(|s| s.is_preamble())
    }

    /// Named sections, in order
    pub fn projects(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_preamble())
    }

    /// Distinct context labels in first-seen order
    pub fn contexts(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for context in self.lines().filter_map(|l| l.context.as_deref()) {
            if !seen.contains(&context) {
                seen.push(context);
            }
        }
        seen
    }

    /// Rebuilds the document text from its raw lines
    pub fn to_text(&self) -> String {
        self.lines()
            .map(|l| l.raw.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
