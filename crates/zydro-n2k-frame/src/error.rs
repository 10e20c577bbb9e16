/// Errors raised by the message container and its envelope codec.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A field read ran past the end of the payload.
    #[error("payload truncated: need {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// The envelope header contains an invalid magic number.
    #[error("invalid envelope magic (expected 0x5A4E \"ZN\")")]
    InvalidMagic,

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing envelopes.
    #[error("envelope I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended in the middle of an envelope.
    #[error("stream closed (incomplete envelope)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
