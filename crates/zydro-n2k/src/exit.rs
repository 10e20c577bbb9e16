use std::fmt;
use std::io;

use zydro_n2k_frame::FrameError;
use zydro_n2k_pgn::PgnError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::InvalidMagic
        | FrameError::PayloadTooLarge { .. }
        | FrameError::Truncated { .. }
        | FrameError::ConnectionClosed => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

pub fn pgn_error(context: &str, err: PgnError) -> CliError {
    match err {
        PgnError::Frame(err) => frame_error(context, err),
        PgnError::UnknownName { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        PgnError::NotThisMessage { .. } | PgnError::UnsupportedPgn(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_errors_are_data_invalid() {
        let err = frame_error("decode", FrameError::InvalidMagic);
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.to_string().starts_with("decode: invalid envelope magic"));
    }

    #[test]
    fn io_errors_keep_kind() {
        let err = io_error(
            "open",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }

    #[test]
    fn nested_frame_error_is_unwrapped() {
        let err = pgn_error(
            "decode",
            PgnError::Frame(FrameError::Truncated {
                needed: 8,
                remaining: 2,
            }),
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("payload truncated"));
    }

    #[test]
    fn unknown_name_is_usage() {
        let err = pgn_error(
            "parse",
            PgnError::UnknownName {
                kind: "command",
                value: "x".to_string(),
            },
        );
        assert_eq!(err.code, USAGE);
    }
}
