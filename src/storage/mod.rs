//! # Storage Layer
//!
//! File access for tix. The domain never touches the filesystem; everything
//! that reads or writes lives here.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Documents | Plain text `.tix` | anywhere |
//! | Archive | Appended text blocks | `{document}{archive_suffix}` |
//! | Project config | TOML | nearest `.tix.toml` above the document |
//! | Global config | TOML | `~/.config/tix/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`TixFile`] writes atomically (temp file + rename) under an `fs2` lock
//! - [`ArchiveStore`] only appends, under an exclusive lock

mod config;
mod tix_file;
mod archive_store;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, WatchConfig, PROJECT_CONFIG_FILE};
pub use tix_file::TixFile;
pub use archive_store::ArchiveStore;
