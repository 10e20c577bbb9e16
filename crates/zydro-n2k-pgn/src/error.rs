use zydro_n2k_frame::FrameError;

/// Errors returned when decoding Zydro messages.
#[derive(Debug, thiserror::Error)]
pub enum PgnError {
    /// The PGN or the vendor tag does not match the requested message type.
    #[error("not a {name} message")]
    NotThisMessage { name: &'static str },

    /// The PGN is not part of the Zydro family.
    #[error("unsupported PGN {0}")]
    UnsupportedPgn(u32),

    /// A textual enumeration value could not be recognized.
    #[error("unrecognized {kind}: {value:?}")]
    UnknownName { kind: &'static str, value: String },

    /// The payload ran out before every field was read.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

pub type Result<T> = std::result::Result<T, PgnError>;
