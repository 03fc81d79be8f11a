//! PWM duty-cycle output
//!
//! The trigger reference voltage is the low-pass filtered output of a PWM
//! channel. Its duty register is the single knob the host can turn.

/// A PWM channel with an 8-bit duty register
///
/// A duty of 0 holds the output low, 255 holds it (almost) fully high.
pub trait DutyOutput {
    /// Write the duty register
    fn set_duty(&mut self, duty: u8);

    /// Read back the last written duty value
    fn duty(&self) -> u8;
}
