use bytes::{Buf, BufMut, BytesMut};

use crate::error::{FrameError, Result};
use crate::limits::{fits_fast_packet, FAST_PACKET_MAX_PAYLOAD};
use crate::message::N2kMessage;

/// Envelope header: magic (2) + PGN (4) + priority (1) + flags (1) + length (2) = 10 bytes.
pub const HEADER_SIZE: usize = 10;

/// Magic bytes: "ZN" (0x5A 0x4E).
pub const MAGIC: [u8; 2] = [0x5A, 0x4E];

/// Flags bit set when the message needs fast-packet segmentation.
pub const FLAG_FAST_PACKET: u8 = 0x01;

/// Encode a message into the envelope wire format.
///
/// Wire format:
/// ```text
/// ┌────────────┬──────────┬──────────┬─────────┬──────────┬────────────────┐
/// │ Magic (2B) │ PGN      │ Priority │ Flags   │ Length   │ Payload        │
/// │ 0x5A 0x4E  │ (4B LE)  │ (1B)     │ (1B)    │ (2B LE)  │ (Length bytes) │
/// │ "ZN"       │          │          │ bit0=FP │          │                │
/// └────────────┴──────────┴──────────┴─────────┴──────────┴────────────────┘
/// ```
pub fn encode_message(message: &N2kMessage, dst: &mut BytesMut) -> Result<()> {
    let len = message.payload.len();
    if len > u16::MAX as usize {
        return Err(FrameError::PayloadTooLarge {
            size: len,
            max: u16::MAX as usize,
        });
    }
    let flags = if message.fast_packet {
        FLAG_FAST_PACKET
    } else {
        0
    };

    dst.reserve(HEADER_SIZE + len);
    dst.put_slice(&MAGIC);
    dst.put_u32_le(message.pgn);
    dst.put_u8(message.priority);
    dst.put_u8(flags);
    dst.put_u16_le(len as u16);
    dst.put_slice(message.payload.as_ref());
    Ok(())
}

/// Decode one message from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete envelope yet.
/// On success, consumes the envelope bytes from the buffer.
pub fn decode_message(src: &mut BytesMut, max_payload: usize) -> Result<Option<N2kMessage>> {
    if src.len() < HEADER_SIZE {
        return Ok(None);
    }

    if src[0..2] != MAGIC {
        return Err(FrameError::InvalidMagic);
    }

    let mut header = &src[2..HEADER_SIZE];
    let pgn = header.get_u32_le();
    let priority = header.get_u8();
    let flags = header.get_u8();
    let payload_len = header.get_u16_le() as usize;

    if payload_len > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: payload_len,
            max: max_payload,
        });
    }

    let total = HEADER_SIZE + payload_len;
    if src.len() < total {
        return Ok(None);
    }

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();

    Ok(Some(N2kMessage::new(
        pgn,
        priority,
        flags & FLAG_FAST_PACKET != 0,
        payload,
    )))
}

/// Configuration for the envelope codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: the fast-packet limit (223).
    pub max_payload_size: usize,
}

impl FrameConfig {
    /// True if every payload this config admits can go on the bus.
    pub fn is_bus_compatible(&self) -> bool {
        fits_fast_packet(self.max_payload_size)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: FAST_PACKET_MAX_PAYLOAD,
        }
    }
}
