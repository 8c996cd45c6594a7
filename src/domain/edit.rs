//! Line-range edits
//!
//! Transforms return whole texts. Hosts that apply edits to a live buffer
//! want the smallest replacement instead, computed here by trimming the
//! lines both texts share at the start and at the end.

use serde::Serialize;

/// Replace lines `start..end` of the old text with `lines`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub start: usize,
    /// Exclusive end line in the old text
    pub end: usize,
    pub lines: Vec<String>,
}

impl TextEdit {
    /// Computes the single edit that turns `old` into `new`, or `None` if equal
    pub fn between(old: &str, new: &str) -> Option<Self> {
        if old == new {
            return None;
        }

        let old_lines: Vec<&str> = old.split('\n').collect();
        let new_lines: Vec<&str> = new.split('\n').collect();

        let prefix = old_lines
            .iter()
            .zip(&new_lines)
            .take_while(|(a, b)| a == b)
            .count();

        let max_suffix = old_lines.len().min(new_lines.len()) - prefix;
        let suffix = old_lines
            .iter()
            .rev()
            .zip(new_lines.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        Some(Self {
            start: prefix,
            end: old_lines.len() - suffix,
            lines: new_lines[prefix..new_lines.len() - suffix]
                .iter()
                .map(|l| l.to_string())
                .collect(),
        })
    }

    /// Applies the edit to a text
    pub fn apply(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let end = self.end.min(lines.len());
        let start = self.start.min(end);

        lines[..start]
            .iter()
            .copied()
            .chain(self.lines.iter().map(String::as_str))
            .chain(lines[end..].iter().copied())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of old lines removed
    pub fn removed(&self) -> usize {
        self.end - self.start
    }
}
