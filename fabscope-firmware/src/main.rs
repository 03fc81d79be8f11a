//! FabScope - single-channel capture instrument firmware
//!
//! Samples one analog input at a fixed rate into a circular buffer and
//! freezes a window centred on each debounced rising edge of the
//! comparator. A host reads windows and sets the comparator reference
//! over a plain serial link.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::Uart;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use fabscope_core::command::CommandProcessor;
use fabscope_hal::{SampleClock, UartConfig};
use fabscope_hal_rp2040::uart::uart_config;
use fabscope_hal_rp2040::{AnalogInput, BlockingSerial, ComparatorInput, TriggerPwm};

use crate::channels::{CAPTURE, GATE};
use crate::tasks::HostProcessor;

mod channels;
mod config;
mod tasks;

/// High-priority executor for the sampler
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Holds the 1 KiB window copy off the main task's stack
static PROCESSOR: StaticCell<HostProcessor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("FabScope firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Host link on UART0 (GPIO0 TX, GPIO1 RX)
    let link = UartConfig::with_baudrate(config.baudrate);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&link));
    let (tx, rx) = BlockingSerial::new(uart).split();
    info!("UART initialized at {} baud", config.baudrate);

    // Trigger reference PWM on GPIO4 (slice 2, channel A)
    let pwm = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, PwmConfig::default());
    let trigger = TriggerPwm::new(pwm, config.trigger_level);

    // Probe on ADC0 (GPIO26), comparator output on GPIO15
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let analog = AnalogInput::new(adc, channel);
    let comparator = ComparatorInput::new(Input::new(p.PIN_15, Pull::None));
    info!("Analog front end initialized");

    // Sampler outranks the command loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);

    GATE.start();
    high_spawner
        .spawn(tasks::sampler_task(
            &CAPTURE,
            &GATE,
            analog,
            comparator,
            config.sample_period_us,
        ))
        .unwrap();

    let processor = PROCESSOR.init(CommandProcessor::new(rx, tx, trigger, &GATE, &CAPTURE));

    info!("Sampling started, waiting for host");
    tasks::run_command_loop(processor, &CAPTURE)
}
