//! Bus-level size and priority limits.

/// Payload bytes carried by one classic CAN frame.
pub const SINGLE_FRAME_PAYLOAD: usize = 8;

/// Largest payload a fast-packet sequence can carry.
pub const FAST_PACKET_MAX_PAYLOAD: usize = 223;

/// Priority is a 3-bit field in the CAN identifier.
pub const MAX_PRIORITY: u8 = 7;

/// Returns true if a payload of `len` bytes fits in one CAN frame.
pub fn fits_single_frame(len: usize) -> bool {
    len <= SINGLE_FRAME_PAYLOAD
}

/// Returns true if a payload of `len` bytes can be carried at all.
pub fn fits_fast_packet(len: usize) -> bool {
    len <= FAST_PACKET_MAX_PAYLOAD
}
