use std::io::{ErrorKind, Read};

use bytes::BytesMut;
use tracing::debug;

use crate::codec::{decode_message, FrameConfig};
use crate::error::{FrameError, Result};
use crate::message::N2kMessage;

const INITIAL_BUFFER_CAPACITY: usize = 1024;
const READ_CHUNK_SIZE: usize = 1024;

/// Reads complete enveloped messages from any `Read` stream.
///
/// Handles partial reads internally; callers always get complete messages.
pub struct FrameReader<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a new reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Read the next complete message (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached.
    pub fn read_message(&mut self) -> Result<N2kMessage> {
        loop {
            if let Some(message) = decode_message(&mut self.buf, self.config.max_payload_size)? {
                debug!(
                    pgn = message.pgn,
                    len = message.payload_len(),
                    "decoded envelope"
                );
                return Ok(message);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Read the next message, or `None` on a clean end of stream.
    ///
    /// EOF in the middle of an envelope is still an error.
    pub fn next_message(&mut self) -> Result<Option<N2kMessage>> {
        match self.read_message() {
            Ok(message) => Ok(Some(message)),
            Err(FrameError::ConnectionClosed) if self.buf.is_empty() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
