//! Sampler task
//!
//! Runs once per sample period at interrupt priority: one ADC conversion,
//! one comparator read, one capture tick. Skips the tick entirely while
//! the gate is closed so the command loop can copy a frozen window.

use defmt::*;
use embassy_time::{Duration, Ticker};

use fabscope_core::capture::{SampleGate, SharedCapture, TickOutcome};
use fabscope_hal::{InputPin, SampleClock, SampleSource};
use fabscope_hal_rp2040::{AnalogInput, ComparatorInput};

/// Log conversion failures once per this many
const ADC_ERROR_LOG_EVERY: u32 = 1000;

#[embassy_executor::task]
pub async fn sampler_task(
    capture: &'static SharedCapture,
    gate: &'static SampleGate,
    mut adc: AnalogInput<'static>,
    comparator: ComparatorInput<'static>,
    period_us: u32,
) {
    info!("Sampler task started ({}us period)", period_us);

    let mut ticker = Ticker::every(Duration::from_micros(period_us as u64));
    let mut reported_errors = 0;

    loop {
        ticker.next().await;

        if !gate.is_running() {
            continue;
        }

        let sample = adc.read_sample();
        let high = comparator.is_high();

        match capture.tick(sample, high) {
            TickOutcome::Sampled => {}
            TickOutcome::Armed { stop_index } => trace!("Armed, stop at {}", stop_index),
            TickOutcome::Frozen => trace!("Window frozen"),
            TickOutcome::Released => trace!("Window released"),
        }

        let errors = adc.errors();
        if errors.wrapping_sub(reported_errors) >= ADC_ERROR_LOG_EVERY {
            warn!("ADC conversion errors: {}", errors);
            reported_errors = errors;
        }
    }
}
