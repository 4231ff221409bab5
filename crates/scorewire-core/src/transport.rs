//! Transport abstractions for scoreboard delivery.
//!
//! This module provides traits for abstracting over the packet delivery
//! layer:
//! - Real game-server sessions (network connections to players)
//! - Mock sessions for testing
//!
//! Delivery model:
//! - Packets for one player are delivered in the order they are handed to
//!   the sink (remove batches before change batches within one update).
//! - Delivery is fire-and-forget: a sink error never rolls back scoreboard
//!   state, callers log and count the failure and continue.

use std::sync::Arc;

use crate::error::Result;
use crate::protocol::{Packet, PlayerId};

// =============================================================================
// Packet Sink Trait
// =============================================================================

/// A destination for scoreboard packets, typically one player's session.
///
/// Implementations must preserve submission order for packets handed to
/// the same sink.
pub trait PacketSink: Send + Sync {
    /// Queue a packet for delivery to this session.
    fn send_packet(&self, packet: &Packet) -> Result<()>;
}

// =============================================================================
// Session Registry Trait
// =============================================================================

/// Resolves players to their active sessions.
///
/// Returns `None` for players with no live session (never connected, or
/// already disconnected). Callers treat `None` as "nothing to deliver".
pub trait SessionRegistry: Send + Sync {
    /// Look up the session for a player, if one is active.
    fn session(&self, player: &PlayerId) -> Option<Arc<dyn PacketSink>>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::RemoveObjectivePayload;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct RecordingSink {
        sent: Mutex<Vec<Packet>>,
    }

    impl PacketSink for RecordingSink {
        fn send_packet(&self, packet: &Packet) -> Result<()> {
            self.sent.lock().unwrap().push(packet.clone());
            Ok(())
        }
    }

    struct StaticRegistry {
        sessions: HashMap<PlayerId, Arc<dyn PacketSink>>,
    }

    impl SessionRegistry for StaticRegistry {
        fn session(&self, player: &PlayerId) -> Option<Arc<dyn PacketSink>> {
            self.sessions.get(player).cloned()
        }
    }

    #[test]
    fn registry_resolves_registered_player() {
        let sink = Arc::new(RecordingSink {
            sent: Mutex::new(Vec::new()),
        });
        let mut sessions: HashMap<PlayerId, Arc<dyn PacketSink>> = HashMap::new();
        sessions.insert(PlayerId::from("Steve"), sink.clone());
        let registry = StaticRegistry { sessions };

        let resolved = registry.session(&PlayerId::from("Steve"));
        assert!(resolved.is_some());

        let packet = Packet::RemoveObjective(RemoveObjectivePayload {
            objective_name: "Steve".to_string(),
        });
        resolved.unwrap().send_packet(&packet).unwrap();
        assert_eq!(sink.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn registry_returns_none_for_unknown_player() {
        let registry = StaticRegistry {
            sessions: HashMap::new(),
        };
        assert!(registry.session(&PlayerId::from("Nobody")).is_none());
    }

    #[test]
    fn sink_preserves_submission_order() {
        let sink = RecordingSink {
            sent: Mutex::new(Vec::new()),
        };
        for name in ["a", "b", "c"] {
            let packet = Packet::RemoveObjective(RemoveObjectivePayload {
                objective_name: name.to_string(),
            });
            sink.send_packet(&packet).unwrap();
        }

        let sent = sink.sent.lock().unwrap();
        let names: Vec<_> = sent
            .iter()
            .filter_map(|p| p.objective_name().map(str::to_string))
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
