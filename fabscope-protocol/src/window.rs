//! Capture window responses.
//!
//! A read request is answered with exactly [`CAPTURE_LEN`] raw sample
//! bytes, oldest first. The arming sample sits just before the midpoint:
//! the window ends on the sample written half a buffer after arming.

use crate::ProtocolError;

/// Number of samples in one capture window
pub const CAPTURE_LEN: usize = 1024;

/// Index of the arming sample within a dumped window
pub const TRIGGER_POSITION: usize = CAPTURE_LEN / 2 - 1;

/// Analog front-end scaling
///
/// Maps an 8-bit code onto the input voltage seen at the probe, in
/// millivolts. The stock front end divides and offsets a negative-going
/// input so that code 255 reads 0 V and code 0 reads `-full_scale_mv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrontEnd {
    /// Input span covered by codes 0..=255 (mV)
    pub full_scale_mv: i32,
    /// Input voltage at code 255 (mV)
    pub top_mv: i32,
}

impl Default for FrontEnd {
    fn default() -> Self {
        Self {
            full_scale_mv: 20_000,
            top_mv: 0,
        }
    }
}

impl FrontEnd {
    /// Convert a raw code to millivolts
    pub fn millivolts(&self, code: u8) -> i32 {
        self.top_mv - self.full_scale_mv + (code as i32 * self.full_scale_mv) / 255
    }
}

/// Host-side view over a read response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureWindow<'a> {
    samples: &'a [u8; CAPTURE_LEN],
}

impl<'a> CaptureWindow<'a> {
    /// Wrap a complete response
    ///
    /// Extra trailing bytes are ignored; fewer than [`CAPTURE_LEN`] bytes
    /// is an error.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ProtocolError> {
        let samples = bytes
            .get(..CAPTURE_LEN)
            .and_then(|s| <&[u8; CAPTURE_LEN]>::try_from(s).ok())
            .ok_or(ProtocolError::ShortResponse)?;
        Ok(Self { samples })
    }

    /// Raw samples, oldest first
    pub fn samples(&self) -> &'a [u8; CAPTURE_LEN] {
        self.samples
    }

    /// Position of the arming sample
    pub fn trigger_position(&self) -> usize {
        TRIGGER_POSITION
    }

    /// Samples recorded before the arming sample
    pub fn pre_trigger(&self) -> &'a [u8] {
        &self.samples[..TRIGGER_POSITION]
    }

    /// Samples from the arming sample onward
    pub fn post_trigger(&self) -> &'a [u8] {
        &self.samples[TRIGGER_POSITION..]
    }

    /// Iterate samples as millivolts
    pub fn millivolts(&self, front_end: FrontEnd) -> impl Iterator<Item = i32> + 'a {
        self.samples.iter().map(move |&code| front_end.millivolts(code))
    }
}
