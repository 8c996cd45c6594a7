//! Text-producing transforms
//!
//! Each transform takes the full document text and returns a new text.
//! Nothing is edited in place.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use super::document::{Document, DONE_TITLE};
use super::line::{context_of, Line};

/// Moves an item line into the Done section.
///
/// The item becomes the first entry under an existing `Done:` header, or a
/// new `Done:` section is appended at the end of the document. Returns
/// `None` when the target is out of range, blank, or a header.
pub fn mark_done(text: &str, target: usize) -> Option<String> {
    let mut lines: Vec<&str> = text.split('\n').collect();

    let raw = *lines.get(target)?;
    let line = Line::classify(target, raw);
    if line.is_blank() || line.is_header() {
        return None;
    }

    let terminated = text.ends_with('\n');
    lines.remove(target);

    match lines.iter().position(|l| l.trim() == DONE_TITLE) {
        Some(header) => lines.insert(header + 1, raw),
        None => {
            while lines.last().is_some_and(|l| l.trim().is_empty()) {
                lines.pop();
            }
            if !lines.is_empty() {
                lines.push("");
            }
            lines.push(DONE_TITLE);
            lines.push(raw);
            if terminated {
                lines.push("");
            }
        }
    }

    Some(lines.join("\n"))
}

/// Sorts the items of every project section by context.
///
/// Every body line takes part in the sort, blank lines included, keyed by
/// its context (or the empty string). Blank lines therefore collect right
/// under each header. Sections are rejoined with one blank line between
/// them. The preamble and the document's final line break are kept as is.
pub fn sort_by_context(text: &str) -> String {
    let (body, terminator) = match text.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (text, ""),
    };

    let doc = Document::parse(body);
    let order = ContextOrder::new();
    let mut out: Vec<&str> = Vec::new();

    if let Some(preamble) = doc.preamble() {
        out.extend(preamble.lines.iter().map(|l| l.raw.as_str()));
    }

    for (i, section) in doc.projects().enumerate() {
        if i > 0 {
            out.push("");
        }
        if let Some(header) = &section.header {
            out.push(&header.raw);
        }

        let mut items: Vec<&str> = section.lines.iter().map(|l| l.raw.as_str()).collect();
        items.sort_by(|a, b| {
            order.compare(context_of(a).unwrap_or(""), context_of(b).unwrap_or(""))
        });
        out.extend(items);
    }

    let mut sorted = out.join("\n");
    sorted.push_str(terminator);
    sorted
}

/// Compares context names in root-locale collation order.
///
/// Builds a collator on every call; sorting many names should go through
/// [`sort_by_context`], which builds one per sort.
pub fn compare_contexts(a: &str, b: &str) -> Ordering {
    ContextOrder::new().compare(a, b)
}

/// Collation for context names: tertiary strength, so accents and case only
/// break ties between otherwise equal names.
struct ContextOrder {
    collator: Option<Collator>,
}

impl ContextOrder {
    fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        Self {
            collator: Collator::try_new(&Default::default(), options).ok(),
        }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => fold_compare(a, b),
        };
        collated.then_with(|| a.cmp(b))
    }
}

/// Case-folded comparison used when no collation data is available.
/// Lowercase sorts before uppercase on a tie.
fn fold_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}
