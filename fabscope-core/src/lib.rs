//! Board-agnostic core logic for the FabScope firmware
//!
//! This crate contains all instrument logic that does not depend on
//! specific hardware implementations:
//!
//! - Circular capture buffer and comparator history
//! - Trigger qualification and the Idle/Armed/Frozen state machine
//! - Per-tick capture controller and its interrupt-safe shared context
//! - Host command processing
//! - Configuration type definitions and parsing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod capture;
pub mod command;
pub mod config;
