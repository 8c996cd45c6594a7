//! # Command-Line Interface
//!
//! A thin host over the domain: reads a `.tix` file, runs one operation and
//! writes the result back.
//!
//! ## Commands
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | View | Read-only inspection | `show`, `annotate`, `fold`, `contexts` |
//! | Edit | Rewrite the document | `done`, `sort`, `archive` |
//! | Live | Re-annotate on change | `watch` |
//!
//! Line numbers are 1-based on the command line and in text output. JSON
//! output carries the domain's 0-based line indices unchanged.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! tix --verbose sort todo.tix
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod document_cmd;
mod edit_cmd;
mod watch;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
