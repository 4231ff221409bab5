//! Per-player scoreboard state and update orchestration.
//!
//! This module provides:
//! - Cached board snapshots ([`PlayerBoard`], [`BoardRegistry`])
//! - Positional line diffing ([`LineDiff`])
//! - Display formatting with line deduplication ([`format_lines`])
//! - The update orchestrator ([`ScoreboardSender`])

mod diff;
mod format;
mod sender;
mod state;

#[cfg(test)]
mod proptest;

pub use diff::LineDiff;
pub use format::format_lines;
pub use sender::{ScoreboardSender, SenderConfig};
pub use state::{BoardRegistry, PlayerBoard};
