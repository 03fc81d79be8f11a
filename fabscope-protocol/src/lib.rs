//! FabScope Serial Protocol
//!
//! Byte-oriented command protocol spoken over the instrument's serial
//! link. There is no framing, no length prefix and no checksum:
//!
//! ```text
//! host → scope   'r'                 request the frozen capture
//! scope → host   1024 raw bytes      oldest sample first
//!
//! host → scope   't' D D D           set trigger level (3 ASCII digits)
//! scope → host   (nothing)
//! ```
//!
//! Any other request byte is ignored by the instrument.
//!
//! The crate is shared by the firmware (request parsing) and host tools
//! (request encoding, response decoding).

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod level;
pub mod window;

pub use command::{Command, CommandParser, CMD_READ, CMD_TRIGGER, MAX_REQUEST_SIZE};
pub use level::{decode_level, encode_level, TRIGGER_DIGITS};
pub use window::{CaptureWindow, FrontEnd, CAPTURE_LEN, TRIGGER_POSITION};

/// Errors raised when encoding requests or decoding responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Output buffer cannot hold the encoded request
    BufferTooSmall,
    /// Capture response shorter than [`CAPTURE_LEN`]
    ShortResponse,
}
