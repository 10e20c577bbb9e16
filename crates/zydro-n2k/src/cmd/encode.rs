use std::fs::OpenOptions;
use std::path::Path;

use tracing::{info, warn};
use zydro_n2k_frame::{FrameConfig, FrameWriter, N2kMessage};
use zydro_n2k_pgn::messages::{CHANNEL_COUNT, WIRE_CHANNELS};
use zydro_n2k_pgn::{
    decode_any, GenericCommand, Heartbeat, ParameterReport, ParameterSet, RemoteChannels,
    ThrottleSetpoint, ThrottleStatus, ZydroMessage,
};

use crate::cmd::{EncodeArgs, EncodeMessage};
use crate::exit::{frame_error, io_error, pgn_error, CliError, CliResult, SUCCESS};
use crate::output::{print_reports, MessageReport, OutputFormat};

const COMMAND_PARAMS: usize = 4;

pub fn run(args: EncodeArgs, format: OutputFormat, config: FrameConfig) -> CliResult<i32> {
    let record = build_record(args.message)?;
    let wire = record.encode();

    match args.out {
        Some(path) => {
            append_envelope(&path, &wire, config)?;
            info!(
                pgn = wire.pgn,
                len = wire.payload_len(),
                path = %path.display(),
                "appended {}",
                record.name()
            );
        }
        None => {
            // Print what a receiver will see, after quantization.
            let received = decode_any(&wire).map_err(|err| pgn_error("re-decode", err))?;
            print_reports(&[MessageReport::decoded(&wire, received)?], format)?;
        }
    }

    Ok(SUCCESS)
}

fn build_record(message: EncodeMessage) -> CliResult<ZydroMessage> {
    let record: ZydroMessage = match message {
        EncodeMessage::Heartbeat(args) => Heartbeat {
            sid: args.sid,
            model: args.model,
            health: args.health,
        }
        .into(),
        EncodeMessage::ThrottleSetpoint(args) => ThrottleSetpoint {
            throttle_id: args.throttle_id,
            mode: args.mode,
            target: args.target,
            shift_gears: args.shift_gears,
        }
        .into(),
        EncodeMessage::ThrottleStatus(args) => ThrottleStatus {
            throttle_id: args.throttle_id,
            mode: args.mode,
            target_value: args.target_value,
            current_value: args.current_value,
            current_gear: args.current_gear,
        }
        .into(),
        EncodeMessage::RemoteControl(args) => {
            let channels = remote_channels(&args.channels)?;
            channels
                .to_input(args.joystick_id, !args.disconnected)
                .into()
        }
        EncodeMessage::GenericCommand(args) => GenericCommand {
            target_id: args.target_id,
            command: args.command,
            params: command_params(&args.params)?,
        }
        .into(),
        EncodeMessage::ParameterReport(args) => ParameterReport {
            param_id: args.param_id,
            param_type: args.param_type,
            param_value: args.param_value,
            is_persisted: args.persisted,
        }
        .into(),
        EncodeMessage::ParameterSet(args) => ParameterSet {
            target_id: args.target_id,
            param_id: args.param_id,
            param_type: args.param_type,
            param_value: args.param_value,
        }
        .into(),
    };
    Ok(record)
}

fn remote_channels(values: &[f32]) -> CliResult<RemoteChannels> {
    if values.len() > CHANNEL_COUNT {
        return Err(CliError::usage(format!(
            "--channels takes at most {CHANNEL_COUNT} values, got {}",
            values.len()
        )));
    }
    let mut channels = [0.0f32; CHANNEL_COUNT];
    channels[..values.len()].copy_from_slice(values);

    if channels[WIRE_CHANNELS..].iter().any(|value| *value != 0.0) {
        warn!("channels 3 to {CHANNEL_COUNT} are not transmitted");
    }
    Ok(RemoteChannels::new(channels))
}

fn command_params(values: &[u64]) -> CliResult<[u64; COMMAND_PARAMS]> {
    if values.len() > COMMAND_PARAMS {
        return Err(CliError::usage(format!(
            "--params takes at most {COMMAND_PARAMS} values, got {}",
            values.len()
        )));
    }
    let mut params = [0u64; COMMAND_PARAMS];
    params[..values.len()].copy_from_slice(values);
    Ok(params)
}

fn append_envelope(path: &Path, wire: &N2kMessage, config: FrameConfig) -> CliResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| io_error(&format!("open {}", path.display()), err))?;
    let mut writer = FrameWriter::with_config(file, config);
    writer
        .send(wire)
        .map_err(|err| frame_error(&format!("write {}", path.display()), err))
}
