//! Wire constants shared by every message in the family.

/// Vendor tag written at payload offset 0, little-endian.
pub const VENDOR_TAG: u16 = 0x3600;

/// Size of the vendor tag on the wire.
pub const TAG_SIZE: usize = 2;

/// Priority used for every message in the family.
pub const PRIORITY: u8 = 5;

pub const PGN_HEARTBEAT: u32 = 65280;
pub const PGN_THROTTLE_SETPOINT: u32 = 65281;
pub const PGN_THROTTLE_STATUS: u32 = 65282;
pub const PGN_REMOTE_CONTROL_INPUT: u32 = 65283;
pub const PGN_GENERIC_COMMAND: u32 = 65290;
pub const PGN_PARAMETER_REPORT: u32 = 65291;
pub const PGN_PARAMETER_SET: u32 = 65292;
