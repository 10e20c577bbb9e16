//! One-byte fixed-point encoding for joystick channels.
//!
//! A channel value in `[-1.0, 1.0]` is sent as `128 + round(127 * v)` and read
//! back as `(byte - 128) / 128`. The two scale factors differ, so a decoded
//! value is biased slightly towards zero: 1.0 comes back as 0.9921875 and -1.0
//! as -0.9921875. Deployed receivers are calibrated against this bias; keep
//! both factors as they are.

/// Byte value that represents 0.0.
pub const CHANNEL_OFFSET: f32 = 128.0;

/// Scale applied when encoding.
pub const ENCODE_SCALE: f32 = 127.0;

/// Scale applied when decoding.
pub const DECODE_SCALE: f32 = 128.0;

/// Compress a channel value into one byte.
///
/// Inputs outside `[-1.0, 1.0]` saturate at 0 or 255; NaN encodes as 0.
pub fn encode_channel(value: f32) -> u8 {
    (CHANNEL_OFFSET + (ENCODE_SCALE * value).round()) as u8
}

/// Expand a channel byte back into a value.
pub fn decode_channel(byte: u8) -> f32 {
    (f32::from(byte) - CHANNEL_OFFSET) / DECODE_SCALE
}
