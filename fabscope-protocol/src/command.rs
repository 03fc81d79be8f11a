//! Command encoding and decoding.
//!
//! Requests:
//! - `'r'` (0x72): dump the frozen capture window
//! - `'t'` (0x74) followed by three ASCII digits: set trigger level

use crate::level::{decode_level, encode_level, TRIGGER_DIGITS};
use crate::ProtocolError;

/// Request byte asking for the captured window
pub const CMD_READ: u8 = b'r';

/// Request byte introducing a trigger level
pub const CMD_TRIGGER: u8 = b't';

/// Longest encoded request (`'t'` + digits)
pub const MAX_REQUEST_SIZE: usize = 1 + TRIGGER_DIGITS;

/// A decoded host request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Dump the frozen capture window
    Read,
    /// Set the trigger reference duty value
    SetTrigger(u8),
}

impl Command {
    /// Encode this command into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, ProtocolError> {
        match *self {
            Command::Read => {
                let slot = buffer.first_mut().ok_or(ProtocolError::BufferTooSmall)?;
                *slot = CMD_READ;
                Ok(1)
            }
            Command::SetTrigger(level) => {
                if buffer.len() < MAX_REQUEST_SIZE {
                    return Err(ProtocolError::BufferTooSmall);
                }
                buffer[0] = CMD_TRIGGER;
                buffer[1..MAX_REQUEST_SIZE].copy_from_slice(&encode_level(level));
                Ok(MAX_REQUEST_SIZE)
            }
        }
    }
}

/// State machine for parsing incoming request bytes
#[derive(Debug, Clone, Default)]
pub struct CommandParser {
    state: ParseState,
    digits: [u8; TRIGGER_DIGITS],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ParseState {
    /// Waiting for a command byte
    #[default]
    WaitingForCommand,
    /// Got `'t'`, collecting digit `n`
    ReadingDigits(usize),
}

impl CommandParser {
    /// Create a new command parser
    pub const fn new() -> Self {
        Self {
            state: ParseState::WaitingForCommand,
            digits: [0; TRIGGER_DIGITS],
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForCommand;
        self.digits = [0; TRIGGER_DIGITS];
    }

    /// Check whether the parser is partway through a trigger command
    pub fn is_pending(&self) -> bool {
        self.state != ParseState::WaitingForCommand
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Some(command)` once a complete request has been seen.
    /// Unknown command bytes are dropped. Digit bytes are taken verbatim,
    /// whatever their value.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        match self.state {
            ParseState::WaitingForCommand => match byte {
                CMD_READ => Some(Command::Read),
                CMD_TRIGGER => {
                    self.state = ParseState::ReadingDigits(0);
                    None
                }
                // Silently ignore anything else
                _ => None,
            },
            ParseState::ReadingDigits(n) => {
                self.digits[n] = byte;
                if n + 1 < TRIGGER_DIGITS {
                    self.state = ParseState::ReadingDigits(n + 1);
                    return None;
                }
                let level = decode_level(self.digits);
                self.reset();
                Some(Command::SetTrigger(level))
            }
        }
    }
}
