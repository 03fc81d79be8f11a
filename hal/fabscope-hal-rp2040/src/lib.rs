//! RP2040-specific HAL for the FabScope firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `fabscope-hal` traits over `embassy-rp` blocking drivers:
//!
//! - Host serial link on a blocking UART
//! - Trigger reference PWM
//! - ADC input reduced to 8-bit samples
//! - Comparator input pin

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod uart;

pub use adc::AnalogInput;
pub use gpio::ComparatorInput;
pub use pwm::TriggerPwm;
pub use uart::{BlockingSerial, SerialError, SerialRx, SerialTx};

// Re-export shared traits from fabscope-hal for convenience
pub use fabscope_hal::{DutyOutput, InputPin, SampleSource, UartRx, UartTx};
