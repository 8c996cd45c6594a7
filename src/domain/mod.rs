//! Domain model for `.tix` documents
//!
//! Contains the parser, the read-only views and the text transforms, without
//! any I/O concerns.

mod line;
mod document;
mod color;
mod annotate;
mod fold;
mod transform;
mod archive;
mod edit;
mod id;

pub use line::{context_of, Line, LineKind};
pub use document::{Document, Section, DONE_TITLE};
pub use color::{ContextColorMap, DEFAULT_PALETTE};
pub use annotate::{annotate, Annotations, ContextSpans, Span};
pub use fold::{folding_ranges, FoldRange};
pub use transform::{compare_contexts, mark_done, sort_by_context};
pub use archive::{archive_block, extract_archive, extract_archive_today, ArchiveError, Archived};
pub use edit::TextEdit;
pub use id::{DocumentId, IdError};
