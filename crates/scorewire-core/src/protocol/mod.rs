//! Protocol module for the scoreboard wire format.
//!
//! This module provides:
//! - Objective and score packet types
//! - Length-prefixed bincode codec
//! - Score entry construction helpers

mod codec;
mod packet;
mod types;

#[cfg(test)]
mod proptest;

pub use codec::{Codec, FRAME_HEADER_LEN};
pub use packet::*;
pub use types::*;
