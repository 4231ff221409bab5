//! Property-based tests for diffing and formatting.
//!
//! These verify:
//! - Applying a diff to the cached board reproduces the desired board
//! - Diff indices stay within the boards they refer to
//! - Formatted lines are unique and keep their margins

#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::scoreboard::{LineDiff, format_lines};

fn arb_board() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,4}", 0..8)
}

/// Replay a diff against the cached board the way a client would: clear
/// removed rows first, then set changed rows.
fn apply(cached: &[String], diff: &LineDiff) -> BTreeMap<usize, String> {
    let mut rows: BTreeMap<usize, String> = cached
        .iter()
        .enumerate()
        .map(|(i, line)| (i, line.clone()))
        .collect();
    for row in diff.removed() {
        rows.remove(row);
    }
    for (row, line) in diff.changed() {
        rows.insert(*row, line.clone());
    }
    rows
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn diff_replay_reproduces_desired_board(cached in arb_board(), desired in arb_board()) {
        let diff = LineDiff::compute(&cached, &desired);
        let replayed = apply(&cached, &diff);

        let expected: BTreeMap<usize, String> = desired
            .iter()
            .enumerate()
            .map(|(i, line)| (i, line.clone()))
            .collect();
        prop_assert_eq!(replayed, expected);
    }

    #[test]
    fn diff_indices_stay_in_range(cached in arb_board(), desired in arb_board()) {
        let diff = LineDiff::compute(&cached, &desired);

        for row in diff.removed() {
            prop_assert!(*row < cached.len());
        }
        for row in diff.changed().keys() {
            prop_assert!(*row < desired.len());
        }
    }

    #[test]
    fn diff_of_identical_boards_is_empty(board in arb_board()) {
        prop_assert!(LineDiff::compute(&board, &board).is_empty());
    }

    #[test]
    fn equal_length_diff_pairs_removals_with_changes(a in arb_board(), b in arb_board()) {
        let len = a.len().min(b.len());
        let diff = LineDiff::compute(&a[..len], &b[..len]);

        let changed_rows: Vec<usize> = diff.changed().keys().copied().collect();
        let removed_rows: Vec<usize> = diff.removed().iter().copied().collect();
        prop_assert_eq!(changed_rows, removed_rows);
    }

    #[test]
    fn formatted_lines_are_unique(raw in arb_board()) {
        let formatted = format_lines(&raw);
        let mut seen = std::collections::HashSet::new();
        for line in &formatted {
            prop_assert!(seen.insert(line.clone()), "duplicate line {:?}", line);
        }
    }

    #[test]
    fn formatted_lines_keep_margins_and_text(raw in arb_board()) {
        let formatted = format_lines(&raw);
        prop_assert_eq!(formatted.len(), raw.len());

        for (line, original) in formatted.iter().zip(&raw) {
            prop_assert!(line.starts_with(' '));
            prop_assert!(line.ends_with(' '));
            let inner = &line[1..line.len() - 1];
            prop_assert!(inner.starts_with(original.as_str()));
            prop_assert!(inner[original.len()..].chars().all(|c| c == ' '));
        }
    }

    #[test]
    fn formatting_is_deterministic(raw in arb_board()) {
        prop_assert_eq!(format_lines(&raw), format_lines(&raw));
    }
}
