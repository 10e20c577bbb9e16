use std::io::Read;

use tracing::{debug, warn};
use zydro_n2k_frame::{FrameConfig, FrameError, FrameReader, N2kMessage, SINGLE_FRAME_PAYLOAD};
use zydro_n2k_pgn::layout::PRIORITY;
use zydro_n2k_pgn::{decode_any, lookup};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_reports, MessageReport, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat, config: FrameConfig) -> CliResult<i32> {
    let (messages, stream_error) = match (args.pgn, args.payload.as_deref()) {
        (Some(pgn), Some(payload)) => (vec![bare_message(pgn, parse_hex(payload)?)], None),
        _ => {
            let input = read_input(&args)?;
            read_envelopes(&input, config)
        }
    };
    debug!(count = messages.len(), "read messages");

    let mut reports = Vec::with_capacity(messages.len());
    for wire in &messages {
        let report = match decode_any(wire) {
            Ok(record) => MessageReport::decoded(wire, record)?,
            Err(err) => {
                warn!(pgn = wire.pgn, "decode failed: {err}");
                MessageReport::failed(wire, err.to_string())?
            }
        };
        reports.push(report);
    }
    print_reports(&reports, format)?;

    // Records before a broken envelope are already printed.
    if let Some(err) = stream_error {
        return Err(frame_error("read envelope", err));
    }
    if reports.iter().any(MessageReport::is_error) {
        return Ok(DATA_INVALID);
    }
    Ok(SUCCESS)
}

/// Wrap a bare payload the way the family would have sent it.
fn bare_message(pgn: u32, payload: Vec<u8>) -> N2kMessage {
    let fast_packet = match lookup(pgn) {
        Some(info) => info.fast_packet,
        None => payload.len() > SINGLE_FRAME_PAYLOAD,
    };
    N2kMessage::new(pgn, PRIORITY, fast_packet, payload)
}

fn read_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(text) = &args.hex {
        return parse_hex(text);
    }
    if let Some(path) = &args.file {
        return std::fs::read(path).map_err(|err| io_error(&format!("read {}", path.display()), err));
    }
    let mut input = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut input)
        .map_err(|err| io_error("read stdin", err))?;
    Ok(input)
}

/// Read envelopes until end of input or the first framing error.
///
/// Messages read before the error are returned along with it.
fn read_envelopes(input: &[u8], config: FrameConfig) -> (Vec<N2kMessage>, Option<FrameError>) {
    let mut reader = FrameReader::with_config(input, config);
    let mut messages = Vec::new();
    loop {
        match reader.next_message() {
            Ok(Some(message)) => messages.push(message),
            Ok(None) => return (messages, None),
            Err(err) => {
                warn!(read = messages.len(), "envelope stream broken: {err}");
                return (messages, Some(err));
            }
        }
    }
}

/// Hex with optional `0x` prefix; whitespace and `:` separators are ignored.
fn parse_hex(text: &str) -> CliResult<Vec<u8>> {
    let digits: String = text
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).map_err(|err| CliError::new(DATA_INVALID, format!("invalid hex: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zydro_n2k_pgn::{Heartbeat, ZydroPgn};

    #[test]
    fn hex_separators_are_ignored() {
        assert_eq!(parse_hex("0x00:36 ff\n02").unwrap(), vec![0x00, 0x36, 0xFF, 0x02]);
    }

    #[test]
    fn odd_hex_is_data_invalid() {
        let err = parse_hex("abc").unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn bare_message_takes_family_flags() {
        let msg = bare_message(65281, vec![0; 9]);
        assert_eq!(msg.priority, 5);
        assert!(!msg.fast_packet);

        let msg = bare_message(127488, vec![0; 9]);
        assert!(msg.fast_packet);
    }

    #[test]
    fn envelopes_are_read_until_eof() {
        let wire = Heartbeat::default().encode();
        let report = MessageReport::decoded(&wire, decode_any(&wire).unwrap()).unwrap();
        let mut input = report.envelope().to_vec();
        input.extend_from_slice(report.envelope());

        let (messages, err) = read_envelopes(&input, FrameConfig::default());
        assert!(err.is_none());
        assert_eq!(messages, vec![wire.clone(), wire]);
    }

    #[test]
    fn truncated_envelope_keeps_earlier_messages() {
        let wire = Heartbeat::default().encode();
        let report = MessageReport::decoded(&wire, decode_any(&wire).unwrap()).unwrap();
        let mut input = report.envelope().to_vec();
        input.extend_from_slice(&[0x5A, 0x4E, 0x00]);

        let (messages, err) = read_envelopes(&input, FrameConfig::default());
        assert_eq!(messages, vec![wire]);
        let err = err.expect("partial envelope should be reported");
        assert!(matches!(err, FrameError::ConnectionClosed));
        assert_eq!(frame_error("read envelope", err).code, DATA_INVALID);
    }
}
