//! Cached scoreboard state per player.
//!
//! The sender keeps one [`PlayerBoard`] per tracked player recording what
//! that player's client currently displays. Diffs are computed against
//! this cache, and the cache is only updated after packets for an update
//! have been handed to the transport.

use crate::protocol::PlayerId;
use std::collections::HashMap;

/// Snapshot of what one player's client currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBoard {
    /// The raw text of the last accepted update, used for the idempotence
    /// check before any parsing happens.
    last_raw_text: String,
    /// Title currently shown on the objective.
    title: String,
    /// Display lines as sent to the client (deduplicated and wrapped).
    lines: Vec<String>,
}

impl PlayerBoard {
    /// Create a snapshot from an accepted update.
    pub fn new(last_raw_text: String, title: String, lines: Vec<String>) -> Self {
        Self {
            last_raw_text,
            title,
            lines,
        }
    }

    /// Raw text of the last accepted update.
    pub fn last_raw_text(&self) -> &str {
        &self.last_raw_text
    }

    /// Title currently displayed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Display lines currently shown, post formatting.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Registry of cached boards keyed by player.
///
/// Purely an in-memory map; entries are inserted on the first accepted
/// update for a player and removed on explicit removal or disconnect.
#[derive(Debug, Default)]
pub struct BoardRegistry {
    boards: HashMap<PlayerId, PlayerBoard>,
}

impl BoardRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached board for a player.
    pub fn get(&self, player: &PlayerId) -> Option<&PlayerBoard> {
        self.boards.get(player)
    }

    /// Insert or replace the cached board for a player.
    pub fn insert(&mut self, player: PlayerId, board: PlayerBoard) {
        self.boards.insert(player, board);
    }

    /// Remove a player's cached board, returning it if present.
    pub fn remove(&mut self, player: &PlayerId) -> Option<PlayerBoard> {
        self.boards.remove(player)
    }

    /// Check whether a player has a cached board.
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.boards.contains_key(player)
    }

    /// Number of tracked players.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check whether no players are tracked.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
