//! Identifier and score-entry types for the display protocol.

use serde::{Deserialize, Serialize};

use crate::constants::ROW_ID_OFFSET;

// =============================================================================
// Player Identifier
// =============================================================================

/// Stable player identifier.
///
/// Doubles as the objective name on the wire: each player gets one objective
/// named after them, so teardown on disconnect needs no extra bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a player id from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Wire Enums
// =============================================================================

/// Display slot an objective is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplaySlot {
    /// Per-player sidebar panel.
    #[default]
    Sidebar,
    /// Player list overlay.
    List,
    /// Below the player's nametag.
    BelowName,
}

impl DisplaySlot {
    /// Slot name as the display surface expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplaySlot::Sidebar => "sidebar",
            DisplaySlot::List => "list",
            DisplaySlot::BelowName => "belowname",
        }
    }
}

/// Sort order for rows within an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lowest score first.
    #[default]
    Ascending,
    /// Highest score first.
    Descending,
}

impl SortOrder {
    /// Numeric wire value.
    pub fn wire_value(&self) -> i32 {
        match self {
            SortOrder::Ascending => 0,
            SortOrder::Descending => 1,
        }
    }
}

/// What a set-score batch does to its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreAction {
    /// Create or overwrite the entries.
    Change,
    /// Delete the entries.
    Remove,
}

impl ScoreAction {
    /// Numeric wire value.
    pub fn wire_value(&self) -> i32 {
        match self {
            ScoreAction::Change => 0,
            ScoreAction::Remove => 1,
        }
    }
}

/// Kind of row an entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// A real tracked player.
    Player,
    /// A tracked entity.
    Entity,
    /// Arbitrary text row (what scoreboard lines use).
    FakePlayer,
}

impl EntryType {
    /// Numeric wire value.
    pub fn wire_value(&self) -> i32 {
        match self {
            EntryType::Player => 1,
            EntryType::Entity => 2,
            EntryType::FakePlayer => 3,
        }
    }
}

// =============================================================================
// Score Entries
// =============================================================================

/// One row in a set-score batch.
///
/// Entry id and score are both `row + 1`: the id addresses the slot for later
/// removal, the score orders rows under ascending sort. Remove entries carry
/// no display text; the surface ignores name and type on removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Slot identifier (1-based on the wire).
    pub entry_id: i64,
    /// Objective this entry belongs to.
    pub objective_name: String,
    /// Score value; doubles as the display ordering key.
    pub score: i32,
    /// Row kind; always fake-player for text lines.
    pub entry_type: EntryType,
    /// Display text for change entries, `None` for removals.
    pub custom_name: Option<String>,
}

impl ScoreEntry {
    /// Build a fake-player text entry for `row` (0-based).
    pub fn fake_player(objective: &str, row: usize, text: impl Into<String>) -> Self {
        Self {
            entry_id: row as i64 + ROW_ID_OFFSET,
            objective_name: objective.to_string(),
            score: (row as i64 + ROW_ID_OFFSET) as i32,
            entry_type: EntryType::FakePlayer,
            custom_name: Some(text.into()),
        }
    }

    /// Build a removal entry for `row` (0-based).
    pub fn removal(objective: &str, row: usize) -> Self {
        Self {
            entry_id: row as i64 + ROW_ID_OFFSET,
            objective_name: objective.to_string(),
            score: (row as i64 + ROW_ID_OFFSET) as i32,
            entry_type: EntryType::FakePlayer,
            custom_name: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
