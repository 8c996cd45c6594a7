//! Live re-annotation
//!
//! Watches a document's directory and prints fresh annotations whenever the
//! document itself changes. Runs until interrupted.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::new_debouncer;

use super::document_cmd::{load_config, print_annotations};
use super::output::Output;
use crate::storage::TixFile;
use crate::workspace::Workspace;

pub fn run(output: &Output, file: &Path) -> Result<()> {
    let config = load_config(output, file)?;
    let tix = TixFile::new(file);
    let id = tix.id();

    let target = file
        .canonicalize()
        .with_context(|| format!("Failed to resolve document: {}", file.display()))?;
    let dir = target
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut workspace = Workspace::new(config.project.palette.len());
    let annotations = workspace.open(id.clone(), &tix.read()?);
    print_annotations(output, &config, &id, &annotations);

    let (tx, rx) = mpsc::channel();
    let debounce = Duration::from_millis(config.project.watch.debounce_ms);
    let mut debouncer = new_debouncer(debounce, tx)?;
    debouncer
        .watcher()
        .watch(&dir, RecursiveMode::NonRecursive)?;

    output.verbose_ctx(
        "watch",
        &format!("Watching {} (debounce: {}ms)", target.display(), config.project.watch.debounce_ms),
    );

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                if !events.iter().any(|e| is_target(&e.path, &target)) {
                    continue;
                }

                // Editors may remove the file briefly while saving
                let text = match tix.read() {
                    Ok(text) => text,
                    Err(e) => {
                        output.verbose_ctx("watch", &format!("Skipping change: {:#}", e));
                        continue;
                    }
                };

                output.verbose_ctx("watch", "Document changed, re-annotating");
                let annotations = workspace.on_document_changed(&id, &text)?;
                print_annotations(output, &config, &id, &annotations);
            }
            Ok(Err(error)) => {
                output.verbose_ctx("watch", &format!("Watch error: {:?}", error));
            }
            Err(e) => {
                output.verbose_ctx("watch", &format!("Channel error: {}", e));
                break;
            }
        }
    }

    workspace.close(&id);
    Ok(())
}

/// Checks if an event path refers to the watched document
fn is_target(path: &Path, target: &Path) -> bool {
    path == target || path.canonicalize().is_ok_and(|p| p == target)
}
