//! Scoreboard update orchestration.
//!
//! [`ScoreboardSender`] is the entry point of the crate. It accepts raw
//! multi-line text per player, decides what the player's client needs to
//! hear about it, and hands the resulting packets to that player's
//! session:
//!
//! - Unchanged text is suppressed without touching the transport.
//! - A changed title tears the objective down and recreates it, followed
//!   by a full resend of every line.
//! - Changed lines under a stable title produce an incremental diff,
//!   removals first, then changes.
//!
//! Delivery is fire-and-forget. A session that fails to accept a packet
//! is logged and counted, and the update sequence continues; the cache
//! always advances to the state the packets described.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::constants::OBJECTIVE_CRITERIA;
use crate::metrics::SenderMetrics;
use crate::protocol::{
    DisplaySlot, Packet, PlayerId, RemoveObjectivePayload, ScoreEntry,
    SetDisplayObjectivePayload, SetScorePayload, SortOrder,
};
use crate::scoreboard::diff::LineDiff;
use crate::scoreboard::format::format_lines;
use crate::scoreboard::state::{BoardRegistry, PlayerBoard};
use crate::transport::{PacketSink, SessionRegistry};

/// Configuration for objective creation.
///
/// Defaults match the sidebar objective every vanilla client understands;
/// overriding is only needed for non-sidebar displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    /// Where the objective is displayed on the client.
    pub display_slot: DisplaySlot,
    /// Sort order for score entries within the objective.
    pub sort_order: SortOrder,
    /// Objective criteria name.
    pub criteria: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            display_slot: DisplaySlot::Sidebar,
            sort_order: SortOrder::Ascending,
            criteria: OBJECTIVE_CRITERIA.to_string(),
        }
    }
}

impl SenderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display slot.
    pub fn with_display_slot(mut self, display_slot: DisplaySlot) -> Self {
        self.display_slot = display_slot;
        self
    }

    /// Set the sort order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Set the objective criteria.
    pub fn with_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.criteria = criteria.into();
        self
    }
}

/// Per-player scoreboard sender.
///
/// Owns the board cache and the delivery metrics; sessions are resolved
/// through the registry on every update so reconnects are picked up
/// without bookkeeping here.
pub struct ScoreboardSender {
    sessions: Arc<dyn SessionRegistry>,
    boards: BoardRegistry,
    config: SenderConfig,
    metrics: SenderMetrics,
}

impl ScoreboardSender {
    /// Create a sender with default objective configuration.
    pub fn new(sessions: Arc<dyn SessionRegistry>) -> Self {
        Self::with_config(sessions, SenderConfig::default())
    }

    /// Create a sender with explicit objective configuration.
    pub fn with_config(sessions: Arc<dyn SessionRegistry>, config: SenderConfig) -> Self {
        Self {
            sessions,
            boards: BoardRegistry::new(),
            config,
            metrics: SenderMetrics::new(),
        }
    }

    /// Update a player's scoreboard to display `text`.
    ///
    /// The first line of `text` is the objective title, every following
    /// line is a scoreboard row. Resending the exact text of the previous
    /// update is a no-op.
    pub fn send(&mut self, player: &PlayerId, text: &str) {
        if self
            .boards
            .get(player)
            .is_some_and(|board| board.last_raw_text() == text)
        {
            trace!(player = %player, "update text unchanged, suppressing resend");
            self.metrics.record_suppressed();
            return;
        }

        let Some(session) = self.sessions.session(player) else {
            debug!(player = %player, "no active session, dropping scoreboard update");
            return;
        };

        let mut segments = text.split('\n');
        let title = segments.next().unwrap_or_default().to_string();
        let raw_lines: Vec<String> = segments.map(str::to_string).collect();

        let cached = self.boards.get(player).cloned();
        let objective = player.as_str().to_string();

        // A new or retitled objective invalidates everything the client
        // shows, so lines are resent in full afterwards.
        let mut full_resend = false;
        match &cached {
            Some(board) if board.title() == title => {}
            Some(_) => {
                debug!(player = %player, "objective title changed, recreating objective");
                self.deliver(
                    session.as_ref(),
                    player,
                    &Packet::RemoveObjective(RemoveObjectivePayload {
                        objective_name: objective.clone(),
                    }),
                );
                self.metrics.record_objective_removed();
                self.create_objective(session.as_ref(), player, &objective, &title);
                full_resend = true;
            }
            None => {
                debug!(player = %player, "creating scoreboard objective");
                self.create_objective(session.as_ref(), player, &objective, &title);
                full_resend = true;
            }
        }

        let lines = format_lines(&raw_lines);

        if full_resend {
            if !lines.is_empty() {
                let entries: Vec<ScoreEntry> = lines
                    .iter()
                    .enumerate()
                    .map(|(row, line)| ScoreEntry::fake_player(&objective, row, line.clone()))
                    .collect();
                let count = entries.len();
                self.deliver(
                    session.as_ref(),
                    player,
                    &Packet::SetScore(SetScorePayload::change(entries)),
                );
                self.metrics.record_lines_set(count);
            }
        } else if let Some(board) = &cached {
            let diff = LineDiff::compute(board.lines(), &lines);
            trace!(
                player = %player,
                removed = diff.removed().len(),
                changed = diff.changed().len(),
                "applying incremental line diff"
            );

            if !diff.removed().is_empty() {
                let entries: Vec<ScoreEntry> = diff
                    .removed()
                    .iter()
                    .map(|&row| ScoreEntry::removal(&objective, row))
                    .collect();
                let count = entries.len();
                self.deliver(
                    session.as_ref(),
                    player,
                    &Packet::SetScore(SetScorePayload::remove(entries)),
                );
                self.metrics.record_lines_removed(count);
            }

            if !diff.changed().is_empty() {
                let entries: Vec<ScoreEntry> = diff
                    .changed()
                    .iter()
                    .map(|(&row, line)| ScoreEntry::fake_player(&objective, row, line.clone()))
                    .collect();
                let count = entries.len();
                self.deliver(
                    session.as_ref(),
                    player,
                    &Packet::SetScore(SetScorePayload::change(entries)),
                );
                self.metrics.record_lines_set(count);
            }
        }

        self.boards.insert(
            player.clone(),
            PlayerBoard::new(text.to_string(), title, lines),
        );
    }

    /// Remove a player's scoreboard from their client and stop tracking.
    ///
    /// Does nothing for players without a board. The cached state is
    /// dropped even when the player has no live session.
    pub fn remove(&mut self, player: &PlayerId) {
        if self.boards.remove(player).is_none() {
            return;
        }

        debug!(player = %player, "removing scoreboard objective");
        match self.sessions.session(player) {
            Some(session) => {
                self.deliver(
                    session.as_ref(),
                    player,
                    &Packet::RemoveObjective(RemoveObjectivePayload {
                        objective_name: player.as_str().to_string(),
                    }),
                );
                self.metrics.record_objective_removed();
            }
            None => {
                debug!(player = %player, "no active session, dropped cached board only");
            }
        }
    }

    /// Discard cached state for a player that left the server.
    ///
    /// No packets are sent; the client is gone. The next `send` for the
    /// same player starts from scratch.
    pub fn on_player_disconnected(&mut self, player: &PlayerId) {
        if self.boards.remove(player).is_some() {
            debug!(player = %player, "dropping scoreboard state for disconnected player");
        }
    }

    /// Delivery and send counters.
    pub fn metrics(&self) -> &SenderMetrics {
        &self.metrics
    }

    /// Objective configuration in use.
    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// Check whether a player currently has a cached board.
    pub fn is_tracking(&self, player: &PlayerId) -> bool {
        self.boards.contains(player)
    }

    /// Snapshot of what a player's client currently displays, if tracked.
    pub fn board(&self, player: &PlayerId) -> Option<&PlayerBoard> {
        self.boards.get(player)
    }

    /// Number of players with a cached board.
    pub fn tracked_players(&self) -> usize {
        self.boards.len()
    }

    fn create_objective(
        &mut self,
        session: &dyn PacketSink,
        player: &PlayerId,
        objective: &str,
        title: &str,
    ) {
        self.deliver(
            session,
            player,
            &Packet::SetDisplayObjective(SetDisplayObjectivePayload {
                objective_name: objective.to_string(),
                display_name: title.to_string(),
                sort_order: self.config.sort_order,
                criteria: self.config.criteria.clone(),
                display_slot: self.config.display_slot,
            }),
        );
        self.metrics.record_objective_created();
    }

    fn deliver(&mut self, session: &dyn PacketSink, player: &PlayerId, packet: &Packet) {
        if let Err(err) = session.send_packet(packet) {
            debug!(player = %player, error = %err, "failed to deliver scoreboard packet");
            self.metrics.record_send_failure();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
