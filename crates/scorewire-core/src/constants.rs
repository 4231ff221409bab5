//! Protocol and formatting constants for scorewire.

// =============================================================================
// Protocol Constants
// =============================================================================

/// Maximum encoded packet size (64 KiB).
///
/// A sidebar holds a handful of short text rows; anything near this limit is
/// a corrupt or hostile frame.
pub const MAX_PACKET_SIZE: usize = 64 * 1024;

/// Objective criteria for text-only scoreboards.
///
/// The display surface requires a criteria name even though fake-player rows
/// track no statistic.
pub const OBJECTIVE_CRITERIA: &str = "dummy";

/// Wire entry ids are 1-based; row indices in this crate are 0-based.
pub const ROW_ID_OFFSET: i64 = 1;

// =============================================================================
// Formatting Constants
// =============================================================================

/// Token appended to a line until it no longer collides with an earlier one.
pub const DEDUP_PADDING: &str = " ";

/// Cosmetic padding added on both sides of every rendered line.
pub const LINE_WRAP: &str = " ";
