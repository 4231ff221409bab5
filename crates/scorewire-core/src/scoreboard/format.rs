//! Display formatting for scoreboard lines.
//!
//! Score entries are keyed by their text on the client, so two rows with
//! identical text would collapse into one. The formatter disambiguates
//! repeated lines by appending padding until the line is unique within
//! the update, then wraps every line in a single leading and trailing
//! space for display margins.

use std::collections::HashSet;

use crate::constants::{DEDUP_PADDING, LINE_WRAP};

/// Make every line unique and add display margins.
///
/// Uniqueness is decided against the padded text of earlier lines in the
/// same update; each pass starts from a clean slate, so the same input
/// always produces the same output.
pub fn format_lines(raw: &[String]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut formatted = Vec::with_capacity(raw.len());

    for line in raw {
        let mut line = line.clone();
        while used.contains(&line) {
            line.push_str(DEDUP_PADDING);
        }
        used.insert(line.clone());
        formatted.push(format!("{LINE_WRAP}{line}{LINE_WRAP}"));
    }

    formatted
}

// =============================================================================
// Tests
// =============================================================================
