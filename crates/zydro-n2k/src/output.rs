use std::io::{IsTerminal, Write};

use bytes::BytesMut;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use serde_json::Value;
use zydro_n2k_frame::{encode_message, N2kMessage, HEADER_SIZE};
use zydro_n2k_pgn::{PgnInfo, ZydroMessage};

use crate::exit::{frame_error, io_error, CliError, CliResult, INTERNAL};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One message as printed by `encode` and `decode`.
#[derive(Serialize, Debug)]
pub struct MessageReport {
    pub pgn: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub priority: u8,
    pub fast_packet: bool,
    /// Payload bytes as lowercase hex, vendor tag included.
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ZydroMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    envelope: Vec<u8>,
}

impl MessageReport {
    pub fn decoded(wire: &N2kMessage, message: ZydroMessage) -> CliResult<Self> {
        let mut report = Self::bare(wire)?;
        report.name = Some(message.name());
        report.message = Some(message);
        Ok(report)
    }

    pub fn failed(wire: &N2kMessage, error: String) -> CliResult<Self> {
        let mut report = Self::bare(wire)?;
        report.name = zydro_n2k_pgn::lookup(wire.pgn).map(|info| info.name);
        report.error = Some(error);
        Ok(report)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn envelope(&self) -> &[u8] {
        &self.envelope
    }

    /// The envelope is only bounded by its length field; `--max-payload`
    /// applies to envelopes written to or read from files and streams.
    fn bare(wire: &N2kMessage) -> CliResult<Self> {
        let mut envelope = BytesMut::with_capacity(HEADER_SIZE + wire.payload_len());
        encode_message(wire, &mut envelope).map_err(|err| frame_error("frame message", err))?;
        Ok(Self {
            pgn: wire.pgn,
            name: None,
            priority: wire.priority,
            fast_packet: wire.fast_packet,
            payload: hex::encode(&wire.payload),
            message: None,
            error: None,
            envelope: envelope.to_vec(),
        })
    }

    /// Record fields as `(name, value)` pairs in wire order, without the type
    /// tag.
    fn fields(&self) -> Vec<(String, String)> {
        let Some(Ok(Value::Object(map))) = self.message.as_ref().map(serde_json::to_value) else {
            return Vec::new();
        };
        map.into_iter()
            .filter(|(key, _)| key != "type")
            .map(|(key, value)| (key, value_text(&value)))
            .collect()
    }
}

pub fn print_reports(reports: &[MessageReport], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            for report in reports {
                println!("{}", to_json(report)?);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PGN", "NAME", "PRI", "FP", "PAYLOAD", "FIELDS"]);
            for report in reports {
                let detail = match &report.error {
                    Some(err) => format!("error: {err}"),
                    None => report
                        .fields()
                        .into_iter()
                        .map(|(key, value)| format!("{key}={value}"))
                        .collect::<Vec<_>>()
                        .join("\n"),
                };
                table.add_row(vec![
                    report.pgn.to_string(),
                    report.name.unwrap_or("-").to_string(),
                    report.priority.to_string(),
                    yes_no(report.fast_packet).to_string(),
                    report.payload.clone(),
                    detail,
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for report in reports {
                println!(
                    "pgn={} name={} priority={} fast_packet={} payload={}",
                    report.pgn,
                    report.name.unwrap_or("-"),
                    report.priority,
                    report.fast_packet,
                    report.payload
                );
                match &report.error {
                    Some(err) => println!("  error: {err}"),
                    None => {
                        for (key, value) in report.fields() {
                            println!("  {key}: {value}");
                        }
                    }
                }
            }
        }
        OutputFormat::Raw => {
            let data: Vec<u8> = reports
                .iter()
                .flat_map(|report| report.envelope().iter().copied())
                .collect();
            print_raw(&data)?;
        }
    }
    Ok(())
}

pub fn print_pgn_table(infos: &[PgnInfo], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(&infos)?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PGN", "NAME", "FAST PACKET", "PAYLOAD BYTES"]);
            for info in infos {
                table.add_row(vec![
                    info.pgn.to_string(),
                    info.name.to_string(),
                    yes_no(info.fast_packet).to_string(),
                    info.payload_len.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for info in infos {
                println!(
                    "{} {} (fast_packet={}, payload={} bytes)",
                    info.pgn, info.name, info.fast_packet, info.payload_len
                );
            }
        }
        OutputFormat::Raw => {
            for info in infos {
                println!("{}", info.pgn);
            }
        }
    }
    Ok(())
}

pub fn print_raw(data: &[u8]) -> CliResult<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(data)
        .and_then(|()| out.flush())
        .map_err(|err| io_error("write stdout", err))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string(value)
        .map_err(|err| CliError::new(INTERNAL, format!("serialize output: {err}")))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zydro_n2k_pgn::{
        Command, DeviceHealth, DeviceModel, GenericCommand, Heartbeat, ThrottleStatus, ZydroPgn,
    };

    fn heartbeat_report() -> MessageReport {
        let record = Heartbeat {
            sid: 7,
            model: DeviceModel::Estop,
            health: DeviceHealth::Pending,
        };
        MessageReport::decoded(&record.encode(), record.into()).unwrap()
    }

    #[test]
    fn report_json_shape() {
        let json = serde_json::to_value(heartbeat_report()).unwrap();

        assert_eq!(json["pgn"], 65280);
        assert_eq!(json["name"], "heartbeat");
        assert_eq!(json["priority"], 5);
        assert_eq!(json["fast_packet"], false);
        assert_eq!(json["payload"], "0036070101");
        assert_eq!(json["message"]["type"], "heartbeat");
        assert_eq!(json["message"]["model"], "estop");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn report_fields_skip_type_tag() {
        let fields = heartbeat_report().fields();
        let keys: Vec<&str> = fields.iter().map(|(key, _)| key.as_str()).collect();

        assert!(!keys.contains(&"type"));
        assert!(fields.contains(&("health".to_string(), "pending".to_string())));
        assert!(fields.contains(&("sid".to_string(), "7".to_string())));
    }

    #[test]
    fn report_envelope_is_framed() {
        let report = heartbeat_report();
        assert_eq!(&report.envelope()[..2], b"ZN");
        assert_eq!(report.envelope().len(), 10 + 5);
    }

    #[test]
    fn failed_report_names_family_pgn() {
        let wire = N2kMessage::new(65280, 5, false, vec![0x01, 0x02]);
        let report = MessageReport::failed(&wire, "not a heartbeat message".into()).unwrap();

        assert!(report.is_error());
        assert_eq!(report.name, Some("heartbeat"));
        assert!(report.fields().is_empty());
    }

    #[test]
    fn report_envelope_ignores_stream_limit() {
        // 36-byte payload, larger than any single frame.
        let record = GenericCommand {
            target_id: 0,
            command: Command::ParameterGet,
            params: [1, 2, 3, 4],
        };
        let report = MessageReport::decoded(&record.encode(), record.into()).unwrap();

        assert_eq!(report.envelope().len(), HEADER_SIZE + 36);
        assert_eq!(report.payload.len(), 36 * 2);
    }

    #[test]
    fn report_fields_follow_wire_order() {
        let record = ThrottleStatus {
            throttle_id: 1,
            current_gear: 2,
            ..ThrottleStatus::default()
        };
        let report = MessageReport::decoded(&record.encode(), record.into()).unwrap();
        let keys: Vec<String> = report.fields().into_iter().map(|(key, _)| key).collect();

        assert_eq!(
            keys,
            vec!["throttle_id", "mode", "target_value", "current_value", "current_gear"]
        );
        let heartbeat_keys: Vec<String> = heartbeat_report()
            .fields()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(heartbeat_keys, vec!["sid", "model", "health"]);
    }
}
