//! Mock sessions for testing without a game server.
//!
//! Provides an in-memory packet sink and a map-backed registry that
//! implement the transport traits, allowing scoreboard logic to be
//! exercised without real player connections.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use scorewire_core::error::{Error, Result};
use scorewire_core::protocol::{Packet, PlayerId};
use scorewire_core::transport::{PacketSink, SessionRegistry};

/// Mock player session recording every packet handed to it.
///
/// Packets are queued in memory for inspection; delivery failures can
/// be simulated by flipping `set_fail_sends`.
#[derive(Debug, Default)]
pub struct MockSession {
    /// Packets delivered to this session, in submission order.
    sent: Mutex<Vec<Packet>>,
    /// When set, every send is rejected with a transport error.
    fail_sends: AtomicBool,
}

impl MockSession {
    /// Create a new mock session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of all packets delivered so far.
    pub fn sent_packets(&self) -> Vec<Packet> {
        self.sent.lock().unwrap().clone()
    }

    /// Drain and return all packets delivered so far.
    pub fn take_sent(&self) -> Vec<Packet> {
        self.sent.lock().unwrap().drain(..).collect()
    }

    /// Count packets delivered so far.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Make every subsequent send fail (or succeed again).
    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }
}

impl PacketSink for MockSession {
    fn send_packet(&self, packet: &Packet) -> Result<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(Error::Transport {
                message: "mock session rejected packet".to_string(),
            });
        }

        self.sent.lock().unwrap().push(packet.clone());
        Ok(())
    }
}

/// Map-backed session registry for tests.
///
/// Players appear as connected once registered and disappear when
/// unregistered, mimicking join and quit on a real server.
#[derive(Debug, Default)]
pub struct MockRegistry {
    sessions: Mutex<HashMap<PlayerId, Arc<MockSession>>>,
}

impl MockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player, returning their session for inspection.
    pub fn register(&self, player: &PlayerId) -> Arc<MockSession> {
        let session = Arc::new(MockSession::new());
        self.sessions
            .lock()
            .unwrap()
            .insert(player.clone(), Arc::clone(&session));
        session
    }

    /// Drop a player's session, as if they disconnected.
    pub fn unregister(&self, player: &PlayerId) {
        self.sessions.lock().unwrap().remove(player);
    }

    /// Number of registered sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl SessionRegistry for MockRegistry {
    fn session(&self, player: &PlayerId) -> Option<Arc<dyn PacketSink>> {
        self.sessions
            .lock()
            .unwrap()
            .get(player)
            .map(|session| Arc::clone(session) as Arc<dyn PacketSink>)
    }
}

// =============================================================================
// Tests
// =============================================================================
