use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::limits::{fits_single_frame, MAX_PRIORITY};

/// Default priority for a freshly opened message (lowest on the bus).
pub const DEFAULT_PRIORITY: u8 = 6;

/// A complete NMEA 2000 message: envelope plus payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct N2kMessage {
    /// Parameter group number identifying the payload type.
    pub pgn: u32,
    /// Arbitration priority, 0 (highest) to 7.
    pub priority: u8,
    /// Whether the payload must be segmented into a fast-packet sequence.
    pub fast_packet: bool,
    /// Raw payload bytes, little-endian fields in schema order.
    pub payload: Bytes,
}

impl N2kMessage {
    /// Create a message from its parts.
    pub fn new(pgn: u32, priority: u8, fast_packet: bool, payload: impl Into<Bytes>) -> Self {
        Self {
            pgn,
            priority: priority & MAX_PRIORITY,
            fast_packet,
            payload: payload.into(),
        }
    }

    /// Payload length in bytes.
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// True if the payload fits in one CAN frame.
    pub fn is_single_frame(&self) -> bool {
        fits_single_frame(self.payload.len())
    }

    /// Open a reader positioned at the first payload byte.
    pub fn reader(&self) -> PayloadReader<'_> {
        PayloadReader::new(self)
    }
}

/// Append-only builder for an [`N2kMessage`].
///
/// All multi-byte fields are written little-endian, as on the bus.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    pgn: u32,
    priority: u8,
    fast_packet: bool,
    buf: BytesMut,
}

impl MessageBuilder {
    /// Open a new message for `pgn` with an empty payload.
    pub fn new(pgn: u32) -> Self {
        Self {
            pgn,
            priority: DEFAULT_PRIORITY,
            fast_packet: false,
            buf: BytesMut::new(),
        }
    }

    /// Set the arbitration priority. Only the low 3 bits are kept.
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = priority & MAX_PRIORITY;
        self
    }

    /// Mark whether the message needs fast-packet segmentation.
    pub fn fast_packet(mut self, fast_packet: bool) -> Self {
        self.fast_packet = fast_packet;
        self
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.put_u8(value);
        self
    }

    pub fn put_u16(&mut self, value: u16) -> &mut Self {
        self.buf.put_u16_le(value);
        self
    }

    pub fn put_f32(&mut self, value: f32) -> &mut Self {
        self.buf.put_f32_le(value);
        self
    }

    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.buf.put_u64_le(value);
        self
    }

    /// Bytes appended so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Close the message.
    pub fn build(self) -> N2kMessage {
        N2kMessage {
            pgn: self.pgn,
            priority: self.priority,
            fast_packet: self.fast_packet,
            payload: self.buf.freeze(),
        }
    }
}

/// Sequential reader over a message payload.
///
/// Each reader starts at offset 0 and owns its position. A read that would
/// run past the end fails with [`FrameError::Truncated`] and leaves the
/// position unchanged.
#[derive(Debug, Clone)]
pub struct PayloadReader<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(message: &'a N2kMessage) -> Self {
        Self::from_slice(message.payload.as_ref())
    }

    pub fn from_slice(payload: &'a [u8]) -> Self {
        Self {
            buf: payload,
            position: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.require(2)?;
        Ok(self.buf.get_u16_le())
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.require(4)?;
        Ok(self.buf.get_f32_le())
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.require(8)?;
        Ok(self.buf.get_u64_le())
    }

    fn require(&mut self, needed: usize) -> Result<()> {
        let remaining = self.buf.remaining();
        if remaining < needed {
            return Err(FrameError::Truncated { needed, remaining });
        }
        self.position += needed;
        Ok(())
    }
}
