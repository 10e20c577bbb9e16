//! Zydro Marine proprietary NMEA 2000 messages.
//!
//! # Crate Structure
//!
//! - [`frame`]: Message envelope, field primitives and envelope stream codec
//! - [`pgn`]: Per-PGN encoders/decoders and dispatch over the family
//!
//! ```
//! use zydro_n2k::pgn::{DeviceHealth, DeviceModel, Heartbeat, ZydroPgn};
//!
//! let heartbeat = Heartbeat {
//!     sid: 0xFF,
//!     model: DeviceModel::AutonomyCore,
//!     health: DeviceHealth::Healthy,
//! };
//! let message = heartbeat.encode();
//! assert_eq!(Heartbeat::decode(&message).unwrap(), heartbeat);
//! ```

/// Re-export frame types.
pub mod frame {
    pub use zydro_n2k_frame::*;
}

/// Re-export PGN codec types.
pub mod pgn {
    pub use zydro_n2k_pgn::*;
}
