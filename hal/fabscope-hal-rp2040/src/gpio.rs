//! Comparator input

use embassy_rp::gpio::Input;
use fabscope_hal::InputPin;

/// Comparator output, high when the probe is above the reference
pub struct ComparatorInput<'d> {
    pin: Input<'d>,
}

impl<'d> ComparatorInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for ComparatorInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
