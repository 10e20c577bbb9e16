//! PGN table and dispatch over the whole message family.

use tracing::trace;
use zydro_n2k_frame::N2kMessage;

use crate::error::{PgnError, Result};
use crate::layout::{
    PGN_GENERIC_COMMAND, PGN_HEARTBEAT, PGN_PARAMETER_REPORT, PGN_PARAMETER_SET,
    PGN_REMOTE_CONTROL_INPUT, PGN_THROTTLE_SETPOINT, PGN_THROTTLE_STATUS,
};
use crate::messages::{
    GenericCommand, Heartbeat, ParameterReport, ParameterSet, RemoteControlInput,
    ThrottleSetpoint, ThrottleStatus,
};
use crate::pgn::ZydroPgn;

/// Static description of one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PgnInfo {
    pub pgn: u32,
    pub name: &'static str,
    pub fast_packet: bool,
    /// Payload bytes including the vendor tag.
    pub payload_len: usize,
}

impl PgnInfo {
    pub const fn of<T: ZydroPgn>() -> Self {
        Self {
            pgn: T::PGN,
            name: T::NAME,
            fast_packet: T::FAST_PACKET,
            payload_len: T::PAYLOAD_LEN,
        }
    }
}

/// Every supported message type, in PGN order.
pub static PGNS: [PgnInfo; 7] = [
    PgnInfo::of::<Heartbeat>(),
    PgnInfo::of::<ThrottleSetpoint>(),
    PgnInfo::of::<ThrottleStatus>(),
    PgnInfo::of::<RemoteControlInput>(),
    PgnInfo::of::<GenericCommand>(),
    PgnInfo::of::<ParameterReport>(),
    PgnInfo::of::<ParameterSet>(),
];

/// Look up a PGN in the family.
pub fn lookup(pgn: u32) -> Option<&'static PgnInfo> {
    PGNS.iter().find(|info| info.pgn == pgn)
}

pub fn is_zydro_pgn(pgn: u32) -> bool {
    lookup(pgn).is_some()
}

/// Any decoded Zydro message.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum ZydroMessage {
    Heartbeat(Heartbeat),
    ThrottleSetpoint(ThrottleSetpoint),
    ThrottleStatus(ThrottleStatus),
    RemoteControlInput(RemoteControlInput),
    GenericCommand(GenericCommand),
    ParameterReport(ParameterReport),
    ParameterSet(ParameterSet),
}

impl ZydroMessage {
    pub fn info(&self) -> PgnInfo {
        match self {
            ZydroMessage::Heartbeat(_) => PgnInfo::of::<Heartbeat>(),
            ZydroMessage::ThrottleSetpoint(_) => PgnInfo::of::<ThrottleSetpoint>(),
            ZydroMessage::ThrottleStatus(_) => PgnInfo::of::<ThrottleStatus>(),
            ZydroMessage::RemoteControlInput(_) => PgnInfo::of::<RemoteControlInput>(),
            ZydroMessage::GenericCommand(_) => PgnInfo::of::<GenericCommand>(),
            ZydroMessage::ParameterReport(_) => PgnInfo::of::<ParameterReport>(),
            ZydroMessage::ParameterSet(_) => PgnInfo::of::<ParameterSet>(),
        }
    }

    pub fn pgn(&self) -> u32 {
        self.info().pgn
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn encode(&self) -> N2kMessage {
        match self {
            ZydroMessage::Heartbeat(m) => m.encode(),
            ZydroMessage::ThrottleSetpoint(m) => m.encode(),
            ZydroMessage::ThrottleStatus(m) => m.encode(),
            ZydroMessage::RemoteControlInput(m) => m.encode(),
            ZydroMessage::GenericCommand(m) => m.encode(),
            ZydroMessage::ParameterReport(m) => m.encode(),
            ZydroMessage::ParameterSet(m) => m.encode(),
        }
    }
}

/// Decode a message of any supported type.
///
/// PGNs outside the family fail with [`PgnError::UnsupportedPgn`]; a family
/// PGN with a foreign vendor tag fails with [`PgnError::NotThisMessage`].
pub fn decode_any(message: &N2kMessage) -> Result<ZydroMessage> {
    let decoded = match message.pgn {
        PGN_HEARTBEAT => Heartbeat::decode(message).map(ZydroMessage::Heartbeat),
        PGN_THROTTLE_SETPOINT => {
            ThrottleSetpoint::decode(message).map(ZydroMessage::ThrottleSetpoint)
        }
        PGN_THROTTLE_STATUS => ThrottleStatus::decode(message).map(ZydroMessage::ThrottleStatus),
        PGN_REMOTE_CONTROL_INPUT => {
            RemoteControlInput::decode(message).map(ZydroMessage::RemoteControlInput)
        }
        PGN_GENERIC_COMMAND => GenericCommand::decode(message).map(ZydroMessage::GenericCommand),
        PGN_PARAMETER_REPORT => {
            ParameterReport::decode(message).map(ZydroMessage::ParameterReport)
        }
        PGN_PARAMETER_SET => ParameterSet::decode(message).map(ZydroMessage::ParameterSet),
        other => Err(PgnError::UnsupportedPgn(other)),
    }?;
    trace!(pgn = message.pgn, name = decoded.name(), "decoded message");
    Ok(decoded)
}

macro_rules! impl_from_record {
    ($($record:ident),+ $(,)?) => {
        $(
            impl From<$record> for ZydroMessage {
                fn from(record: $record) -> Self {
                    ZydroMessage::$record(record)
                }
            }
        )+
    };
}

impl_from_record!(
    Heartbeat,
    ThrottleSetpoint,
    ThrottleStatus,
    RemoteControlInput,
    GenericCommand,
    ParameterReport,
    ParameterSet,
);
