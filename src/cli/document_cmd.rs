//! Read-only document commands: show, annotate, fold, contexts

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::{folding_ranges, Annotations, ContextColorMap, DocumentId, Span};
use crate::storage::{Config, TixFile};
use crate::workspace::Workspace;

/// Loads config for a document and reports where it came from
pub(super) fn load_config(output: &Output, file: &Path) -> Result<Config> {
    let config = Config::for_document(file)?;
    match &config.project_file {
        Some(path) => output.verbose_ctx("config", &format!("Using {}", path.display())),
        None => output.verbose_ctx("config", "No .tix.toml found, using defaults"),
    }
    Ok(config)
}

pub fn show(output: &Output, file: &Path) -> Result<()> {
    let doc = TixFile::new(file).parse()?;
    output.verbose_ctx("show", &format!("Parsed {} line(s) into {} section(s)", doc.line_count, doc.sections.len()));

    if output.is_json() {
        let sections: Vec<_> = doc
            .sections
            .iter()
            .map(|s| {
                serde_json::json!({
                    "title": s.title,
                    "header_line": s.header_index(),
                    "is_done": s.is_done,
                    "items": s.lines.iter().filter(|l| !l.is_blank()).count(),
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "lines": doc.line_count,
            "sections": sections,
            "contexts": doc.contexts(),
        }));
        return Ok(());
    }

    println!("{:<6} {:<30} {:>6}", "LINE", "SECTION", "ITEMS");
    println!("{}", "-".repeat(44));

    for section in &doc.sections {
        let line = section
            .header_index()
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        let title = if section.is_preamble() {
            "(preamble)"
        } else {
            section.title.as_str()
        };
        let items = section.lines.iter().filter(|l| !l.is_blank()).count();
        println!("{:<6} {:<30} {:>6}", line, title, items);
    }

    Ok(())
}

pub fn annotate(output: &Output, file: &Path) -> Result<()> {
    let config = load_config(output, file)?;
    let tix = TixFile::new(file);
    let text = tix.read()?;

    let mut workspace = Workspace::new(config.project.palette.len());
    let id = tix.id();
    let annotations = workspace.open(id.clone(), &text);

    print_annotations(output, &config, &id, &annotations);
    Ok(())
}

/// Prints annotations; text mode uses 1-based line numbers
pub(super) fn print_annotations(
    output: &Output,
    config: &Config,
    id: &DocumentId,
    annotations: &Annotations,
) {
    if output.is_json() {
        let contexts: Vec<_> = annotations
            .contexts
            .iter()
            .map(|c| {
                serde_json::json!({
                    "context": c.context,
                    "color": c.color,
                    "color_value": config.project.color(c.color),
                    "spans": c.spans,
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "id": id,
            "headers": annotations.headers,
            "done_items": annotations.done_items,
            "contexts": contexts,
        }));
        return;
    }

    let lines = |spans: &[Span]| {
        spans
            .iter()
            .map(|s| (s.line + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("Document: {}", id);
    println!("Headers: {}", lines(annotations.headers.as_slice()));
    println!("Done: {}", lines(annotations.done_items.as_slice()));

    for group in &annotations.contexts {
        let spans = group
            .spans
            .iter()
            .map(|s| format!("{}:{}-{}", s.line + 1, s.start, s.end))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:<16} {:<10} {}",
            group.context,
            config.project.color(group.color),
            spans
        );
    }
}

pub fn fold(output: &Output, file: &Path) -> Result<()> {
    let doc = TixFile::new(file).parse()?;
    let ranges = folding_ranges(&doc);
    output.verbose_ctx("fold", &format!("Found {} folding range(s)", ranges.len()));

    if output.is_json() {
        output.data(&ranges);
        return Ok(());
    }

    for range in &ranges {
        let title = doc
            .lines()
            .find(|l| l.index == range.start)
            .map(|l| l.trimmed())
            .unwrap_or_default();
        println!("{}-{}\t{}", range.start + 1, range.end + 1, title);
    }

    Ok(())
}

pub fn contexts(output: &Output, file: &Path) -> Result<()> {
    let config = load_config(output, file)?;
    let doc = TixFile::new(file).parse()?;

    let mut colors = ContextColorMap::new(config.project.palette.len());
    let contexts: Vec<_> = doc
        .contexts()
        .into_iter()
        .map(|name| {
            let color = colors.color_for(name);
            (name, color)
        })
        .collect();

    if output.is_json() {
        let items: Vec<_> = contexts
            .iter()
            .map(|(name, color)| {
                serde_json::json!({
                    "context": name,
                    "color": color,
                    "color_value": config.project.color(*color),
                })
            })
            .collect();
        output.data(&items);
    } else if contexts.is_empty() {
        println!("No contexts");
    } else {
        for (name, color) in &contexts {
            println!("{:<16} {}", name, config.project.color(*color));
        }
    }

    Ok(())
}
