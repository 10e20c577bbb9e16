use clap::{Args, Subcommand};
use std::path::PathBuf;

use zydro_n2k_frame::FrameConfig;
use zydro_n2k_pgn::{Command as ZydroCommand, DeviceHealth, DeviceModel, ThrottleSetpointMode};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod list;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one message and print it or append it to a file.
    Encode(EncodeArgs),
    /// Decode framed envelopes from hex, a file, or stdin.
    Decode(DecodeArgs),
    /// Print the supported PGN table.
    List(ListArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: FrameConfig) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format, config),
        Command::Decode(args) => decode::run(args, format, config),
        Command::List(args) => list::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub message: EncodeMessage,
    /// Append the framed envelope to FILE instead of printing.
    #[arg(long, value_name = "FILE", global = true)]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum EncodeMessage {
    /// PGN 65280.
    Heartbeat(HeartbeatArgs),
    /// PGN 65281.
    ThrottleSetpoint(ThrottleSetpointArgs),
    /// PGN 65282.
    ThrottleStatus(ThrottleStatusArgs),
    /// PGN 65283.
    RemoteControl(RemoteControlArgs),
    /// PGN 65290.
    GenericCommand(GenericCommandArgs),
    /// PGN 65291.
    ParameterReport(ParameterReportArgs),
    /// PGN 65292.
    ParameterSet(ParameterSetArgs),
}

#[derive(Args, Debug)]
pub struct HeartbeatArgs {
    /// Sequence identifier.
    #[arg(long, default_value_t = 0xFF)]
    pub sid: u8,
    /// Device model (label or code).
    #[arg(long, default_value = "invalid")]
    pub model: DeviceModel,
    /// Device health (label or code).
    #[arg(long, default_value = "invalid")]
    pub health: DeviceHealth,
}

#[derive(Args, Debug)]
pub struct ThrottleSetpointArgs {
    #[arg(long, default_value_t = 0)]
    pub throttle_id: u8,
    #[arg(long, default_value = "idle")]
    pub mode: ThrottleSetpointMode,
    /// Fraction (-1.0 to 1.0) or RPM, depending on mode.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub target: f32,
    #[arg(long)]
    pub shift_gears: bool,
}

#[derive(Args, Debug)]
pub struct ThrottleStatusArgs {
    #[arg(long, default_value_t = 0)]
    pub throttle_id: u8,
    #[arg(long, default_value = "idle")]
    pub mode: ThrottleSetpointMode,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub target_value: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub current_value: f32,
    #[arg(long, default_value_t = 0)]
    pub current_gear: u8,
}

#[derive(Args, Debug)]
pub struct RemoteControlArgs {
    #[arg(long, default_value_t = 0)]
    pub joystick_id: u8,
    /// Mark the joystick as disconnected.
    #[arg(long)]
    pub disconnected: bool,
    /// Up to eight channel values (comma-separated); only the first two are sent.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        num_args = 1..
    )]
    pub channels: Vec<f32>,
}

#[derive(Args, Debug)]
pub struct GenericCommandArgs {
    /// Target device; 0 addresses every device.
    #[arg(long, default_value_t = 0)]
    pub target_id: u8,
    /// Command (label or code).
    #[arg(long)]
    pub command: ZydroCommand,
    /// Up to four parameters (comma-separated); missing ones are 0.
    #[arg(long, value_delimiter = ',')]
    pub params: Vec<u64>,
}

#[derive(Args, Debug)]
pub struct ParameterReportArgs {
    #[arg(long)]
    pub param_id: u64,
    #[arg(long, default_value_t = 0)]
    pub param_type: u64,
    #[arg(long, default_value_t = 0)]
    pub param_value: u64,
    #[arg(long)]
    pub persisted: bool,
}

#[derive(Args, Debug)]
pub struct ParameterSetArgs {
    #[arg(long)]
    pub target_id: u8,
    #[arg(long)]
    pub param_id: u64,
    #[arg(long, default_value_t = 0)]
    pub param_type: u64,
    #[arg(long, default_value_t = 0)]
    pub param_value: u64,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Framed envelopes as hex (whitespace and ':' ignored).
    #[arg(long, conflicts_with_all = ["file", "payload"])]
    pub hex: Option<String>,
    /// Read framed envelopes from a file.
    #[arg(long, conflicts_with_all = ["hex", "payload"])]
    pub file: Option<PathBuf>,
    /// Decode a bare payload (hex) for this PGN instead of envelopes.
    #[arg(long, requires = "payload")]
    pub pgn: Option<u32>,
    /// Bare payload bytes as hex, vendor tag included.
    #[arg(long, requires = "pgn")]
    pub payload: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
