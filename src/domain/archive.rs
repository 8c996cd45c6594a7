//! Archive extraction
//!
//! Pulls the completed items out of the Done section and formats them as a
//! dated block for an append-only archive. Writing the block anywhere is the
//! caller's job.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use super::document::Document;

/// Reasons there is nothing to archive. Informational, not faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArchiveError {
    #[error("No Done: section found")]
    NoDoneSection,

    #[error("Nothing to archive")]
    NothingToArchive,
}

/// Result of a successful extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archived {
    /// Block to append to the archive
    pub block: String,

    /// Document text with the Done section's items removed
    pub remaining: String,

    /// Number of archived item lines
    pub count: usize,
}

/// Formats an archive block for the given date and item lines
pub fn archive_block(date: NaiveDate, items: &[&str]) -> String {
    format!("\nArchived {}:\n{}\n", date.format("%Y-%m-%d"), items.join("\n"))
}

/// Extracts the Done section using today's UTC date
pub fn extract_archive_today(text: &str) -> Result<Archived, ArchiveError> {
    extract_archive(text, Utc::now().date_naive())
}

/// Extracts the Done section's items.
///
/// The header stays in place. Every line from the header up to the last
/// non-blank line of the section is removed, so the blank lines that
/// separate it from the next section survive.
pub fn extract_archive(text: &str, date: NaiveDate) -> Result<Archived, ArchiveError> {
    let doc = Document::parse(text);
    let done = doc.done_section().ok_or(ArchiveError::NoDoneSection)?;

    let items: Vec<&str> = done
        .lines
        .iter()
        .filter(|l| !l.is_blank())
        .map(|l| l.raw.as_str())
        .collect();

    let last = done
        .last_content_line()
        .map(|l| l.index)
        .ok_or(ArchiveError::NothingToArchive)?;
    let first = done.lines.first().map(|l| l.index).unwrap_or(last);

    let remaining = doc
        .lines()
        .filter(|l| l.index < first || l.index > last)
        .map(|l| l.raw.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Archived {
        block: archive_block(date, &items),
        remaining,
        count: items.len(),
    })
}
