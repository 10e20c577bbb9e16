//! One module per message schema.
//!
//! Field order in `write_fields` is the wire order and must match
//! `read_fields` exactly; the payload carries no field tags.

mod command;
mod heartbeat;
mod parameter;
mod remote;
mod throttle;

pub use command::GenericCommand;
pub use heartbeat::Heartbeat;
pub use parameter::{ParameterReport, ParameterSet};
pub use remote::{RemoteChannels, RemoteControlInput, CHANNEL_COUNT, WIRE_CHANNELS};
pub use throttle::{ThrottleSetpoint, ThrottleStatus};
