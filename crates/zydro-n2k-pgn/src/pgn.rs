use tracing::trace;
use zydro_n2k_frame::{MessageBuilder, N2kMessage, PayloadReader};

use crate::error::{PgnError, Result};
use crate::layout::{PRIORITY, TAG_SIZE, VENDOR_TAG};

/// A Zydro proprietary message schema.
///
/// Implementors describe their identity and their field order; framing,
/// tagging and identity checks are shared.
pub trait ZydroPgn: Sized {
    /// Parameter group number.
    const PGN: u32;
    /// Human-readable message name.
    const NAME: &'static str;
    /// Whether the message is sent as a fast-packet sequence.
    const FAST_PACKET: bool;
    /// Payload length including the vendor tag.
    const PAYLOAD_LEN: usize;

    /// Append fields after the vendor tag, in wire order.
    fn write_fields(&self, builder: &mut MessageBuilder);

    /// Read fields after the vendor tag, in the same order as `write_fields`.
    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self>;

    /// Build a complete message. Encoding cannot fail.
    fn encode(&self) -> N2kMessage {
        let mut builder = open_message(Self::PGN, Self::FAST_PACKET);
        self.write_fields(&mut builder);
        let message = builder.build();
        trace!(
            pgn = Self::PGN,
            len = message.payload_len(),
            "encoded {}",
            Self::NAME
        );
        message
    }

    /// Decode a received message.
    ///
    /// Fails with [`PgnError::NotThisMessage`] before any field is read if the
    /// PGN or vendor tag differs.
    fn decode(message: &N2kMessage) -> Result<Self> {
        let mut reader = open_payload(message, Self::PGN).ok_or(PgnError::NotThisMessage {
            name: Self::NAME,
        })?;
        Self::read_fields(&mut reader)
    }

    /// True if the message carries this PGN and the vendor tag.
    fn is_match(message: &N2kMessage) -> bool {
        open_payload(message, Self::PGN).is_some()
    }
}

/// Open a message with the family priority and the vendor tag in place.
pub fn open_message(pgn: u32, fast_packet: bool) -> MessageBuilder {
    let mut builder = MessageBuilder::new(pgn)
        .priority(PRIORITY)
        .fast_packet(fast_packet);
    builder.put_u16(VENDOR_TAG);
    builder
}

/// Check identity and strip the vendor tag.
///
/// Returns a reader positioned on the first field, or `None` when the PGN
/// differs or the payload does not start with the vendor tag.
pub fn open_payload(message: &N2kMessage, pgn: u32) -> Option<PayloadReader<'_>> {
    if message.pgn != pgn {
        return None;
    }
    let mut reader = message.reader();
    match reader.read_u16() {
        Ok(VENDOR_TAG) => Some(reader),
        _ => None,
    }
}

/// Read a bool stored as one byte. Any non-zero byte is `true`.
pub(crate) fn read_bool(reader: &mut PayloadReader<'_>) -> Result<bool> {
    Ok(reader.read_u8()? != 0)
}

pub(crate) const fn payload_len(fields: usize) -> usize {
    TAG_SIZE + fields
}
