//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{document_cmd, edit_cmd, watch};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "tix")]
#[command(author, version, about = "Plain-text todo lists with projects, contexts and a Done section")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the sections of a document
    Show {
        /// Path to the .tix document
        file: PathBuf,
    },

    /// Print highlight spans (headers, done items, contexts)
    Annotate {
        /// Path to the .tix document
        file: PathBuf,
    },

    /// Print folding ranges
    Fold {
        /// Path to the .tix document
        file: PathBuf,
    },

    /// List context labels in first-seen order
    Contexts {
        /// Path to the .tix document
        file: PathBuf,
    },

    /// Move an item into the Done section
    Done {
        /// Path to the .tix document
        file: PathBuf,

        /// Line number of the item (1-based)
        line: usize,

        /// Print the new document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Sort the items of every project by context
    Sort {
        /// Path to the .tix document
        file: PathBuf,

        /// Print the new document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Move Done items into the archive file
    Archive {
        /// Path to the .tix document
        file: PathBuf,

        /// Print the archive block instead of writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Re-annotate the document every time it changes
    Watch {
        /// Path to the .tix document
        file: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = match cli.format {
        Some(format) => format,
        None => Config::load_global()?.default_format.into(),
    };
    let output = Output::new(format, cli.verbose);

    output.verbose("tix starting");

    match cli.command {
        Commands::Show { file } => document_cmd::show(&output, &file)?,
        Commands::Annotate { file } => document_cmd::annotate(&output, &file)?,
        Commands::Fold { file } => document_cmd::fold(&output, &file)?,
        Commands::Contexts { file } => document_cmd::contexts(&output, &file)?,

        Commands::Done { file, line, dry_run } => {
            output.verbose_ctx("done", &format!("Marking line {} of {} done", line, file.display()));
            edit_cmd::done(&output, &file, line, dry_run)?
        }
        Commands::Sort { file, dry_run } => {
            output.verbose_ctx("sort", &format!("Sorting {}", file.display()));
            edit_cmd::sort(&output, &file, dry_run)?
        }
        Commands::Archive { file, dry_run } => {
            output.verbose_ctx("archive", &format!("Archiving Done items of {}", file.display()));
            edit_cmd::archive(&output, &file, dry_run)?
        }

        Commands::Watch { file } => watch::run(&output, &file)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
