//! State shared between the sampler interrupt and the command loop
//!
//! The sampler is the only writer of the capture context; the command loop
//! only reads it while the gate is closed.

use fabscope_core::capture::{SampleGate, SharedCapture};

/// Capture buffer, comparator history and trigger state
pub static CAPTURE: SharedCapture = SharedCapture::new();

/// Open while the sampler should take samples
pub static GATE: SampleGate = SampleGate::new();
