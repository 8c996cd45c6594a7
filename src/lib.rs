//! tix - plain-text todo lists
//!
//! A `.tix` document is a list of projects (lines ending in `:`) holding
//! `context - text` items, plus a `Done:` section for completed work. This
//! crate parses documents, computes highlight spans and folding ranges, and
//! rewrites text for mark-done, sort-by-context and archiving.

pub mod domain;
pub mod storage;
pub mod workspace;
pub mod cli;

pub use domain::{Annotations, Document, DocumentId, Line, LineKind, Section};
pub use workspace::Workspace;
