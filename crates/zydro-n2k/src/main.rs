mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use tracing::warn;
use zydro_n2k_frame::{FrameConfig, FAST_PACKET_MAX_PAYLOAD};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "zydro-n2k",
    version,
    about = "Encode and decode Zydro Marine proprietary NMEA 2000 messages"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", env = "ZYDRO_N2K_FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "ZYDRO_N2K_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Largest payload accepted when reading or writing envelopes.
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = FAST_PACKET_MAX_PAYLOAD,
        env = "ZYDRO_N2K_MAX_PAYLOAD",
        global = true
    )]
    max_payload: usize,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = FrameConfig {
        max_payload_size: cli.max_payload,
    };
    if !config.is_bus_compatible() {
        warn!(
            max_payload = config.max_payload_size,
            "envelopes larger than a fast-packet sequence will be accepted"
        );
    }
    let result = cmd::run(cli.command, format, config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
