use zydro_n2k_frame::{MessageBuilder, PayloadReader};

use crate::error::Result;
use crate::fixed_point::{decode_channel, encode_channel};
use crate::layout::PGN_REMOTE_CONTROL_INPUT;
use crate::pgn::{payload_len, read_bool, ZydroPgn};

/// Logical channels on a Zydro joystick.
pub const CHANNEL_COUNT: usize = 8;

/// Channels actually carried on the wire.
pub const WIRE_CHANNELS: usize = 2;

/// PGN 65283: remote control input.
///
/// Raw joystick input. Only channels 1 and 2 are transmitted, each as a
/// one-byte fixed-point value (see [`crate::fixed_point`]). A decoded channel
/// is the quantized value, not the one that was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoteControlInput {
    pub joystick_id: u8,
    pub connected: bool,
    /// -1.0 to 1.0.
    pub channel1: f32,
    /// -1.0 to 1.0.
    pub channel2: f32,
}

impl RemoteControlInput {
    /// The record as a receiver will see it after fixed-point quantization.
    pub fn quantized(self) -> Self {
        Self {
            channel1: decode_channel(encode_channel(self.channel1)),
            channel2: decode_channel(encode_channel(self.channel2)),
            ..self
        }
    }
}

impl ZydroPgn for RemoteControlInput {
    const PGN: u32 = PGN_REMOTE_CONTROL_INPUT;
    const NAME: &'static str = "remote control input";
    const FAST_PACKET: bool = false;
    const PAYLOAD_LEN: usize = payload_len(1 + 1 + WIRE_CHANNELS);

    fn write_fields(&self, builder: &mut MessageBuilder) {
        builder
            .put_u8(self.joystick_id)
            .put_u8(u8::from(self.connected))
            .put_u8(encode_channel(self.channel1))
            .put_u8(encode_channel(self.channel2));
    }

    fn read_fields(reader: &mut PayloadReader<'_>) -> Result<Self> {
        Ok(Self {
            joystick_id: reader.read_u8()?,
            connected: read_bool(reader)?,
            channel1: decode_channel(reader.read_u8()?),
            channel2: decode_channel(reader.read_u8()?),
        })
    }
}

/// Caller-side state for all eight joystick channels.
///
/// Channels 3 to 8 never reach the wire: [`RemoteChannels::to_input`] drops
/// them and [`RemoteChannels::apply`] leaves them as they were.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoteChannels(pub [f32; CHANNEL_COUNT]);

impl RemoteChannels {
    pub fn new(channels: [f32; CHANNEL_COUNT]) -> Self {
        Self(channels)
    }

    /// Build the wire record from channels 1 and 2.
    pub fn to_input(&self, joystick_id: u8, connected: bool) -> RemoteControlInput {
        RemoteControlInput {
            joystick_id,
            connected,
            channel1: self.0[0],
            channel2: self.0[1],
        }
    }

    /// Store a received input into channels 1 and 2.
    pub fn apply(&mut self, input: &RemoteControlInput) {
        self.0[0] = input.channel1;
        self.0[1] = input.channel2;
    }

    pub fn channels(&self) -> &[f32; CHANNEL_COUNT] {
        &self.0
    }
}
