//! FabScope Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the capture core is written
//! against. Chip-specific crates implement them; the core and the command
//! processor only ever see these traits, so all of the capture logic can
//! be exercised on the host with mock peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  fabscope-firmware                      │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │  fabscope-core   │──▶│  fabscope-hal    │
//! └──────────────────┘   │  (this crate)    │
//!                        └──────────────────┘
//!                                 ▲
//!                                 │
//!                        ┌──────────────────┐
//!                        │ fabscope-hal-    │
//!                        │     rp2040       │
//!                        └──────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Host serial link
//! - [`gpio::InputPin`] - Comparator output
//! - [`pwm::DutyOutput`] - Trigger reference level
//! - [`sampling::SampleClock`], [`sampling::SampleSource`] - Analog sampling

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod sampling;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::InputPin;
pub use pwm::DutyOutput;
pub use sampling::{SampleClock, SampleSource};
pub use uart::{UartConfig, UartRx, UartTx};
