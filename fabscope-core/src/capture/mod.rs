//! Sampling and trigger capture
//!
//! Everything that runs once per sample tick lives here. The controller
//! is plain data and fully deterministic; [`SharedCapture`] wraps it for
//! use across the interrupt boundary.

pub mod buffer;
pub mod controller;
pub mod gate;
pub mod history;
pub mod qualifier;
pub mod shared;
pub mod state;

pub use buffer::CaptureBuffer;
pub use controller::{CaptureController, TickOutcome};
pub use gate::SampleGate;
pub use history::ComparatorHistory;
pub use qualifier::Qualifier;
pub use shared::{SharedCapture, Snapshot};
pub use state::{TriggerEvent, TriggerState};

pub use fabscope_protocol::CAPTURE_LEN;
