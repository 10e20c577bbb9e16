use zydro_n2k_frame::{MessageBuilder, PayloadReader};

use crate::error::Result;
use crate::layout::{PGN_THROTTLE_SETPOINT, PGN_THROTTLE_STATUS};
use crate::pgn::{payload_len, read_bool, ZydroPgn};
use crate::types::ThrottleSetpointMode;

/// PGN 65281: throttle control setpoint.
///
/// Sets the target of a throttle and shift controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrottleSetpoint {
    /// Throttle channel: typically 0 (all engines), 1 (port) or 2 (starboard).
    pub throttle_id: u8,
    pub mode: ThrottleSetpointMode,
    /// -1.0 to 1.0 in percentage mode, engine RPM in RPM mode.
    pub target: f32,
    /// Also shift gears in tandem with the throttle, if available.
    pub shift_gears: bool,
}

impl ZydroPgn for ThrottleSetpoint {
    const PGN: u32 = PGN_THROTTLE_SETPOINT;
    const NAME: &'static str = "throttle setpoint";
    // 9 bytes, one more than a CAN frame, yet sent without fast-packet
    // segmentation by deployed firmware.
    const FAST_PACKET: bool = false;
    const PAYLOAD_LEN: usize = payload_len(1 + 1 + 4 + 1);

    fn write_fields(&self, builder: &mut MessageBuilder) {
        builder
            .put_u8(self.throttle_id)
            .put_u8(self.mode.code())
            .put_f32(self.target)
            .put_u8(u8::from(self.shift_gears));
    }

    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            throttle_id: reader.read_u8()?,
            mode: ThrottleSetpointMode::from_code(reader.read_u8()?),
            target: reader.read_f32()?,
            shift_gears: read_bool(reader)?,
        })
    }
}

/// PGN 65282: throttle control status.
///
/// Broadcast by a throttle and shift controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrottleStatus {
    pub throttle_id: u8,
    /// Active setpoint mode.
    pub mode: ThrottleSetpointMode,
    pub target_value: f32,
    pub current_value: f32,
    /// 0 = disengaged, 1 = forward, 2 = reverse.
    pub current_gear: u8,
}

impl ZydroPgn for ThrottleStatus {
    const PGN: u32 = PGN_THROTTLE_STATUS;
    const NAME: &'static str = "throttle status";
    const FAST_PACKET: bool = true;
    const PAYLOAD_LEN: usize = payload_len(1 + 1 + 4 + 4 + 1);

    fn write_fields(&self, builder: &mut MessageBuilder) {
        builder
            .put_u8(self.throttle_id)
            .put_u8(self.mode.code())
            .put_f32(self.target_value)
            .put_f32(self.current_value)
            .put_u8(self.current_gear);
    }

    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            throttle_id: reader.read_u8()?,
            mode: ThrottleSetpointMode::from_code(reader.read_u8()?),
            target_value: reader.read_f32()?,
            current_value: reader.read_f32()?,
            current_gear: reader.read_u8()?,
        })
    }
}
