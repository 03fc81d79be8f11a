//! ADC sampling
//!
//! The probe is wired to one of the GPIO26..=29 analog inputs.
//! Conversions are 12-bit; the capture core stores 8-bit samples, so the
//! four low bits are dropped.

use embassy_rp::adc::{Adc, Blocking, Channel};
use fabscope_hal::SampleSource;

/// Reduce a 12-bit conversion to the stored 8-bit sample
pub const fn to_sample(raw: u16) -> u8 {
    ((raw >> 4) & 0xFF) as u8
}

/// One ADC channel sampled with blocking conversions
pub struct AnalogInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    /// Last good sample, repeated when a conversion fails
    last: u8,
    errors: u32,
}

impl<'d> AnalogInput<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            last: 0,
            errors: 0,
        }
    }

    /// Conversions that failed since boot (wrapping)
    pub fn errors(&self) -> u32 {
        self.errors
    }
}

impl SampleSource for AnalogInput<'_> {
    fn read_sample(&mut self) -> u8 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => self.last = to_sample(raw),
            Err(_) => self.errors = self.errors.wrapping_add(1),
        }
        self.last
    }
}
