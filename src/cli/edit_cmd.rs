//! Document-changing commands: done, sort, archive

use std::path::Path;

use anyhow::Result;

use super::document_cmd::load_config;
use super::output::Output;
use crate::domain::{extract_archive_today, mark_done, sort_by_context, TextEdit};
use crate::storage::{ArchiveStore, TixFile};

/// Writes the new text, or prints it for a dry run
fn commit(output: &Output, tix: &TixFile, old: &str, new: &str, dry_run: bool) -> Result<Option<TextEdit>> {
    let edit = TextEdit::between(old, new);
    if let Some(edit) = &edit {
        output.verbose_ctx(
            "edit",
            &format!(
                "Replacing {} line(s) at line {} with {} line(s)",
                edit.removed(),
                edit.start + 1,
                edit.lines.len()
            ),
        );
    }

    if dry_run {
        print!("{}", new);
    } else {
        tix.write(new)?;
    }

    Ok(edit)
}

pub fn done(output: &Output, file: &Path, line: usize, dry_run: bool) -> Result<()> {
    if line == 0 {
        anyhow::bail!("Line numbers start at 1");
    }

    let tix = TixFile::new(file);
    let text = tix.read()?;

    let Some(new) = mark_done(&text, line - 1) else {
        output.info(&format!("Nothing to mark done on line {}", line));
        return Ok(());
    };

    let item = text.split('\n').nth(line - 1).unwrap_or_default().trim().to_string();
    let edit = commit(output, &tix, &text, &new, dry_run)?;

    if dry_run {
        return Ok(());
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "success": true,
            "changed": true,
            "item": item,
            "edit": edit,
        }));
    } else {
        output.success(&format!("Done: {}", item));
    }

    Ok(())
}

pub fn sort(output: &Output, file: &Path, dry_run: bool) -> Result<()> {
    let tix = TixFile::new(file);
    let text = tix.read()?;
    let sorted = sort_by_context(&text);

    if sorted == text {
        if dry_run {
            print!("{}", text);
        } else {
            output.info("Already sorted");
        }
        return Ok(());
    }

    let edit = commit(output, &tix, &text, &sorted, dry_run)?;

    if dry_run {
        return Ok(());
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "success": true,
            "changed": true,
            "edit": edit,
        }));
    } else {
        output.success(&format!("Sorted {}", file.display()));
    }

    Ok(())
}

pub fn archive(output: &Output, file: &Path, dry_run: bool) -> Result<()> {
    let config = load_config(output, file)?;
    let tix = TixFile::new(file);
    let text = tix.read()?;

    let archived = match extract_archive_today(&text) {
        Ok(archived) => archived,
        Err(reason) => {
            output.info(&reason.to_string());
            return Ok(());
        }
    };

    if dry_run {
        print!("{}", archived.block);
        return Ok(());
    }

    // Append before rewriting the document
    let store = ArchiveStore::new(config.archive_path(file));
    output.verbose_ctx("archive", &format!("Appending {} item(s) to {}", archived.count, store.path().display()));
    store.append(&archived.block)?;
    tix.write(&archived.remaining)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "success": true,
            "changed": true,
            "archived": archived.count,
            "archive": store.path().display().to_string(),
        }));
    } else {
        output.success(&format!(
            "Archived {} item(s) to {}",
            archived.count,
            store.path().display()
        ));
    }

    Ok(())
}
