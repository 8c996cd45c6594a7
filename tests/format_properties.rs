//! Property tests for the document model
//!
//! Documents are generated from a small alphabet of line shapes so that
//! headers, items, Done sections and blank lines all show up often.

use proptest::prelude::*;
use tix_cli::domain::{
    annotate, folding_ranges, mark_done, sort_by_context, ContextColorMap, Document, TextEdit,
};

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("Done:".to_string()),
        Just(":".to_string()),
        "[A-Z][a-z]{0,6}:",
        "[ \t]{0,2}[a-z]{1,5} - [a-z ]{0,10}",
        "[ \t]{0,2}[a-z]{1,5}[ \t]-[ \t][a-z ]{0,10}",
        "[a-z ]{1,12}",
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(line_strategy(), 0..20), any::<bool>()).prop_map(|(lines, newline)| {
        let mut text = lines.join("\n");
        if newline {
            text.push('\n');
        }
        text
    })
}

proptest! {
    #[test]
    fn parse_round_trips(text in document_strategy()) {
        let doc = Document::parse(&text);
        prop_assert_eq!(doc.to_text(), text.clone());
        prop_assert_eq!(Document::parse(&doc.to_text()), doc);
    }

    #[test]
    fn sections_partition_lines(text in document_strategy()) {
        let doc = Document::parse(&text);
        let indices: Vec<_> = doc.lines().map(|l| l.index).collect();
        prop_assert_eq!(indices, (0..doc.line_count).collect::<Vec<_>>());
    }

    #[test]
    fn colors_follow_first_seen_order(names in prop::collection::vec("[a-e]{1,2}", 1..30), size in 1usize..6) {
        let mut colors = ContextColorMap::new(size);
        let mut seen: Vec<String> = Vec::new();
        for name in &names {
            if !seen.contains(name) {
                seen.push(name.clone());
            }
            let expected = seen.iter().position(|s| s == name).unwrap() % size;
            prop_assert_eq!(colors.color_for(name), expected);
        }
    }

    #[test]
    fn folds_end_on_content(text in document_strategy()) {
        let doc = Document::parse(&text);
        let lines: Vec<_> = doc.lines().collect();
        for range in folding_ranges(&doc) {
            prop_assert!(range.end > range.start);
            prop_assert!(lines[range.start].is_header());
            prop_assert!(!lines[range.end].is_blank());
        }
    }

    #[test]
    fn annotation_is_repeatable(text in document_strategy()) {
        let doc = Document::parse(&text);
        let mut colors = ContextColorMap::default();
        let first = annotate(&doc, &mut colors);
        prop_assert_eq!(annotate(&doc, &mut colors), first);
    }

    #[test]
    fn mark_done_keeps_item_count(text in document_strategy(), target in 0usize..20) {
        match mark_done(&text, target) {
            None => {}
            Some(new) => {
                let count = |t: &str| t.split('\n').filter(|l| !l.trim().is_empty()).count();
                let added_header = usize::from(!text.split('\n').any(|l| l.trim() == "Done:"));
                prop_assert_eq!(count(&new), count(&text) + added_header);

                let done = Document::parse(&new);
                let section = done.done_section().unwrap();
                let moved = text.split('\n').nth(target).unwrap();
                prop_assert_eq!(section.lines[0].raw.as_str(), moved);
            }
        }
    }

    #[test]
    fn sort_keeps_every_line(text in document_strategy()) {
        let sorted = sort_by_context(&text);
        let mut before: Vec<_> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
        let mut after: Vec<_> = sorted.split('\n').filter(|l| !l.trim().is_empty()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn edits_reproduce_transforms(text in document_strategy()) {
        let sorted = sort_by_context(&text);
        if let Some(edit) = TextEdit::between(&text, &sorted) {
            prop_assert_eq!(edit.apply(&text), sorted);
        }
    }
}
