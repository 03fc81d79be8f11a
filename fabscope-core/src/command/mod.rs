//! Host command processing
//!
//! Runs in the foreground loop, one request byte at a time.

pub mod processor;

pub use processor::{CommandProcessor, ProcessError, Response};
