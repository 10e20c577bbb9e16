//! NMEA 2000 message envelope and field primitives.
//!
//! A message is a PGN, a 3-bit priority, a fast-packet flag and an opaque
//! payload. Payload fields are appended with [`MessageBuilder`] and read back
//! with [`PayloadReader`]; both own their cursor, so two decoders looking at
//! the same message never share position state.
//!
//! The [`codec`] module adds a small envelope wire format so whole messages
//! can be stored or piped between processes:
//! - A 2-byte magic number ("ZN")
//! - The PGN, priority and flags
//! - A 2-byte little-endian payload length
//!
//! Bus I/O and fast-packet segmentation are left to the transport.

pub mod codec;
pub mod error;
pub mod limits;
pub mod message;
pub mod reader;
pub mod writer;

pub use codec::{decode_message, encode_message, FrameConfig, HEADER_SIZE, MAGIC};
pub use error::{FrameError, Result};
pub use limits::{FAST_PACKET_MAX_PAYLOAD, MAX_PRIORITY, SINGLE_FRAME_PAYLOAD};
pub use message::{MessageBuilder, N2kMessage, PayloadReader};
pub use reader::FrameReader;
pub use writer::FrameWriter;
