//! Top-level packet enum for scoreboard display updates.
//!
//! These are the only operations this core emits toward a session. They are
//! delivered strictly in the order handed to the sink: a stale removal
//! arriving after a fresh set for the same slot would erase the new content.

use serde::{Deserialize, Serialize};

use crate::constants::OBJECTIVE_CRITERIA;

use super::types::{DisplaySlot, ScoreAction, ScoreEntry, SortOrder};

// =============================================================================
// Payloads
// =============================================================================

/// Create an objective and attach it to a display slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDisplayObjectivePayload {
    /// Objective identifier (the player id string).
    pub objective_name: String,
    /// Title text shown above the lines.
    pub display_name: String,
    /// Row ordering within the slot.
    pub sort_order: SortOrder,
    /// Criteria name the surface requires.
    pub criteria: String,
    /// Where the objective is displayed.
    pub display_slot: DisplaySlot,
}

impl SetDisplayObjectivePayload {
    /// A sidebar objective with the conventional defaults.
    pub fn sidebar(objective_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            objective_name: objective_name.into(),
            display_name: display_name.into(),
            sort_order: SortOrder::Ascending,
            criteria: OBJECTIVE_CRITERIA.to_string(),
            display_slot: DisplaySlot::Sidebar,
        }
    }
}

/// Tear down an objective. The display surface drops its lines with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveObjectivePayload {
    /// Objective identifier (the player id string).
    pub objective_name: String,
}

/// Change or remove a batch of score entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScorePayload {
    /// Whether the entries are being set or deleted.
    pub action: ScoreAction,
    /// Entries, ascending by row.
    pub entries: Vec<ScoreEntry>,
}

impl SetScorePayload {
    /// A change batch.
    pub fn change(entries: Vec<ScoreEntry>) -> Self {
        Self {
            action: ScoreAction::Change,
            entries,
        }
    }

    /// A removal batch.
    pub fn remove(entries: Vec<ScoreEntry>) -> Self {
        Self {
            action: ScoreAction::Remove,
            entries,
        }
    }
}

// =============================================================================
// Top-level Packet Enum
// =============================================================================

/// A display update handed to a session sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Packet {
    /// Create an objective (title + display parameters).
    SetDisplayObjective(SetDisplayObjectivePayload),
    /// Remove an objective and, implicitly, all its lines.
    RemoveObjective(RemoveObjectivePayload),
    /// Set or remove a batch of line entries.
    SetScore(SetScorePayload),
}

impl Packet {
    /// Objective the packet targets.
    pub fn objective_name(&self) -> Option<&str> {
        match self {
            Packet::SetDisplayObjective(p) => Some(&p.objective_name),
            Packet::RemoveObjective(p) => Some(&p.objective_name),
            Packet::SetScore(p) => p.entries.first().map(|e| e.objective_name.as_str()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
