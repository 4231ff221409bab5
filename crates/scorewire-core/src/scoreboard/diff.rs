//! Positional line diffing for scoreboard updates.
//!
//! Computes the difference between the lines a player currently displays
//! and the lines they should display, so that an update touches only the
//! rows that changed instead of resending the whole board.
//!
//! The diff is positional: row `i` of the cached board is compared with
//! row `i` of the desired board. Rows past the end of the shorter side are
//! cut (removed) or new (changed with no removal). A row that exists on
//! both sides but differs is marked both removed and changed; the client
//! clears the old entry before the replacement is set, which keeps the
//! wire ordering uniform across update shapes.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Difference between a cached board and a desired board, by row index.
///
/// Iteration order of both collections is ascending row index, which is
/// also the order entries are laid out in the resulting packets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDiff {
    /// Rows whose text must be set, with their new text.
    changed: BTreeMap<usize, String>,
    /// Rows whose current entry must be cleared first.
    removed: BTreeSet<usize>,
}

impl LineDiff {
    /// Compute the diff that transforms `cached` into `desired`.
    pub fn compute(cached: &[String], desired: &[String]) -> Self {
        let mut diff = LineDiff::default();

        match desired.len().cmp(&cached.len()) {
            Ordering::Equal => {
                for (i, line) in desired.iter().enumerate() {
                    if cached[i] != *line {
                        diff.changed.insert(i, line.clone());
                        diff.removed.insert(i);
                    }
                }
            }
            Ordering::Less => {
                for (i, old) in cached.iter().enumerate() {
                    match desired.get(i) {
                        None => {
                            diff.removed.insert(i);
                        }
                        Some(line) if line != old => {
                            diff.changed.insert(i, line.clone());
                            diff.removed.insert(i);
                        }
                        Some(_) => {}
                    }
                }
            }
            Ordering::Greater => {
                for (i, line) in desired.iter().enumerate() {
                    match cached.get(i) {
                        None => {
                            diff.changed.insert(i, line.clone());
                        }
                        Some(old) if old != line => {
                            diff.changed.insert(i, line.clone());
                            diff.removed.insert(i);
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        diff
    }

    /// Rows to set, in ascending row order.
    pub fn changed(&self) -> &BTreeMap<usize, String> {
        &self.changed
    }

    /// Rows to clear, in ascending row order.
    pub fn removed(&self) -> &BTreeSet<usize> {
        &self.removed
    }

    /// Check whether the boards were identical.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
