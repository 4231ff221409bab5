//! Wire codec for scoreboard packets.
//!
//! Format: 4-byte little-endian length prefix + bincode-encoded Packet.
//!
//! The sender hands typed packets to its sink; this codec is for sink
//! implementations that ship them over a byte stream. Partial reads return
//! Ok(None) so callers can keep buffering.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::constants::MAX_PACKET_SIZE;
use crate::error::{Error, Result};
use crate::protocol::Packet;

/// Length of the frame header (4 bytes, little-endian u32).
pub const FRAME_HEADER_LEN: usize = 4;

/// Codec for length-prefixed bincode encoding of packets.
pub struct Codec;

impl Codec {
    /// Encode a packet to bytes including the length header.
    pub fn encode(packet: &Packet) -> Result<Bytes> {
        let payload = bincode::serialize(packet).map_err(|e| Error::Codec {
            message: format!("serialization failed: {e}"),
        })?;

        if payload.len() > MAX_PACKET_SIZE {
            return Err(Error::Codec {
                message: format!(
                    "packet too large: {} bytes (max {})",
                    payload.len(),
                    MAX_PACKET_SIZE
                ),
            });
        }

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_LEN + payload.len());
        buf.put_u32_le(payload.len() as u32);
        buf.put_slice(&payload);

        Ok(buf.freeze())
    }

    /// Decode a packet from a buffer.
    ///
    /// Returns:
    /// - Ok(Some(packet)) if a complete frame was decoded (buffer advanced)
    /// - Ok(None) if more data is needed (buffer unchanged)
    /// - Err if the frame is invalid
    pub fn decode(buf: &mut BytesMut) -> Result<Option<Packet>> {
        if buf.len() < FRAME_HEADER_LEN {
            return Ok(None);
        }

        // Peek the length without consuming.
        let len = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;

        if len > MAX_PACKET_SIZE {
            return Err(Error::Codec {
                message: format!("frame length {len} exceeds maximum {MAX_PACKET_SIZE}"),
            });
        }

        if buf.len() < FRAME_HEADER_LEN + len {
            return Ok(None);
        }

        buf.advance(FRAME_HEADER_LEN);
        let payload = buf.split_to(len);
        let packet = bincode::deserialize(&payload).map_err(|e| Error::Codec {
            message: format!("deserialization failed: {e}"),
        })?;

        Ok(Some(packet))
    }

    /// Decode from a slice (convenience for testing).
    pub fn decode_slice(data: &[u8]) -> Result<Option<Packet>> {
        let mut buf = BytesMut::from(data);
        Self::decode(&mut buf)
    }
}
