//! scorewire-core: per-player sidebar scoreboards with minimal wire updates.
//!
//! This crate provides:
//! - Typed display-protocol packets and a length-prefixed codec
//! - Per-player cached board state and its registry
//! - Line diffing for minimal remove/set patches
//! - Line formatting (de-duplication for a surface that collapses equal rows)
//! - The sending orchestrator that ties the above together
//! - Transport seams for the host server's sessions
//! - Logging and metrics

pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod protocol;
pub mod scoreboard;
pub mod transport;

pub use error::{Error, Result};
pub use logging::{LogFormat, init_logging};
pub use metrics::SenderMetrics;
pub use protocol::{Packet, PlayerId};
pub use scoreboard::{ScoreboardSender, SenderConfig};
pub use transport::{PacketSink, SessionRegistry};
