//! Metrics collection for the scoreboard sender.
//!
//! Counters for what actually went over the wire, plus the no-ops and
//! failures that never did. All arithmetic saturates.

use serde::{Deserialize, Serialize};

/// Sender-side counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderMetrics {
    /// Total packets handed to session sinks (including failed deliveries).
    pub packets_sent: u64,
    /// Objectives created (title create packets).
    pub objectives_created: u64,
    /// Objectives removed (title remove packets).
    pub objectives_removed: u64,
    /// Individual line entries set across all change batches.
    pub lines_set: u64,
    /// Individual line entries removed across all remove batches.
    pub lines_removed: u64,
    /// `send` calls suppressed by the unchanged-text check.
    pub sends_suppressed: u64,
    /// Packet deliveries that returned an error (logged and dropped).
    pub send_failures: u64,
}

impl SenderMetrics {
    /// Create a zeroed metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an objective creation packet.
    pub fn record_objective_created(&mut self) {
        self.objectives_created = self.objectives_created.saturating_add(1);
        self.packets_sent = self.packets_sent.saturating_add(1);
    }

    /// Record an objective removal packet.
    pub fn record_objective_removed(&mut self) {
        self.objectives_removed = self.objectives_removed.saturating_add(1);
        self.packets_sent = self.packets_sent.saturating_add(1);
    }

    /// Record a change batch of `entries` line entries.
    pub fn record_lines_set(&mut self, entries: usize) {
        self.lines_set = self.lines_set.saturating_add(entries as u64);
        self.packets_sent = self.packets_sent.saturating_add(1);
    }

    /// Record a remove batch of `entries` line entries.
    pub fn record_lines_removed(&mut self, entries: usize) {
        self.lines_removed = self.lines_removed.saturating_add(entries as u64);
        self.packets_sent = self.packets_sent.saturating_add(1);
    }

    /// Record a `send` call that matched the cached text and emitted nothing.
    pub fn record_suppressed(&mut self) {
        self.sends_suppressed = self.sends_suppressed.saturating_add(1);
    }

    /// Record a failed packet delivery.
    pub fn record_send_failure(&mut self) {
        self.send_failures = self.send_failures.saturating_add(1);
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Tests
// =============================================================================
