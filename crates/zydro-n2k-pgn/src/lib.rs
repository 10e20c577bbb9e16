//! Zydro Marine proprietary NMEA 2000 messages.
//!
//! Every message in the family shares one framing discipline:
//! - priority 5, with the fast-packet flag set for payloads that do not fit
//!   one CAN frame
//! - a 2-byte vendor tag (`0x3600`, little-endian) at the start of the payload
//! - fixed-order little-endian fields, no tags or lengths
//!
//! Each record implements [`ZydroPgn`], which provides `encode` and `decode`.
//! [`decode_any`] dispatches a received message to the right record.
//!
//! Decoding fails with [`PgnError::NotThisMessage`] when either the PGN or the
//! vendor tag does not match; the two cases are deliberately not told apart.

pub mod error;
pub mod fixed_point;
pub mod layout;
pub mod messages;
pub mod pgn;
pub mod registry;
pub mod types;

pub use error::{PgnError, Result};
pub use messages::{
    GenericCommand, Heartbeat, ParameterReport, ParameterSet, RemoteChannels,
    RemoteControlInput, ThrottleSetpoint, ThrottleStatus,
};
pub use pgn::ZydroPgn;
pub use registry::{decode_any, is_zydro_pgn, lookup, PgnInfo, ZydroMessage, PGNS};
pub use types::{Command, DeviceHealth, DeviceModel, ThrottleSetpointMode};
