//! Trigger reference PWM
//!
//! Channel A of one PWM slice, run with an 8-bit period so the duty
//! register maps one-to-one onto the host's trigger level. An external RC
//! filter turns it into the comparator reference voltage.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fabscope_hal::DutyOutput;

/// PWM top for an 8-bit period (counter wraps after 256 steps)
pub const PWM_TOP: u16 = 255;

pub struct TriggerPwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    duty: u8,
}

impl<'d> TriggerPwm<'d> {
    /// Take over a slice and start it at the given duty
    pub fn new(mut pwm: Pwm<'d>, duty: u8) -> Self {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = duty as u16;
        pwm.set_config(&config);
        Self { pwm, config, duty }
    }
}

impl DutyOutput for TriggerPwm<'_> {
    fn set_duty(&mut self, duty: u8) {
        self.config.compare_a = duty as u16;
        self.pwm.set_config(&self.config);
        self.duty = duty;
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}
