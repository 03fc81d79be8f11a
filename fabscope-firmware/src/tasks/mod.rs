//! Firmware tasks
//!
//! The sampler runs on the high-priority interrupt executor; the command
//! loop owns the thread-mode executor.

pub mod command;
pub mod sampler;

pub use command::{run_command_loop, HostProcessor};
pub use sampler::sampler_task;
