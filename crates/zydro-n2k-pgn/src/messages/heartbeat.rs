use zydro_n2k_frame::{MessageBuilder, PayloadReader};

use crate::error::Result;
use crate::layout::PGN_HEARTBEAT;
use crate::pgn::{payload_len, ZydroPgn};
use crate::types::{DeviceHealth, DeviceModel};

/// PGN 65280: product heartbeat.
///
/// Broadcast periodically by every Zydro product for auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heartbeat {
    /// Sequence identifier tying related PGNs together; 0xFF when unused.
    pub sid: u8,
    pub model: DeviceModel,
    pub health: DeviceHealth,
}

impl ZydroPgn for Heartbeat {
    const PGN: u32 = PGN_HEARTBEAT;
    const NAME: &'static str = "heartbeat";
    const FAST_PACKET: bool = false;
    const PAYLOAD_LEN: usize = payload_len(3);

    fn write_fields(&self, builder: &mut MessageBuilder) {
        builder
            .put_u8(self.sid)
            .put_u8(self.model.code())
            .put_u8(self.health.code());
    }

    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            sid: reader.read_u8()?,
            model: DeviceModel::from_code(reader.read_u8()?),
            health: DeviceHealth::from_code(reader.read_u8()?),
        })
    }
}
