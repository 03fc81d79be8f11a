//! Sample clock gate
//!
//! The tick source keeps running in hardware; the gate decides whether a
//! tick reaches the capture controller. The producer runs at a higher
//! priority than the consumer on a single core, so once `stop` returns no
//! tick is in flight and none will start until `start`.

use fabscope_hal::SampleClock;
use portable_atomic::{AtomicBool, Ordering};

/// Atomic run/halt flag shared by the producer and the consumer
#[derive(Debug)]
pub struct SampleGate {
    running: AtomicBool,
}

impl Default for SampleGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleGate {
    /// Create a halted gate
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
        }
    }
}

impl SampleClock for SampleGate {
    fn start(&self) {
        self.running.store(true, Ordering::Release);
    }

    fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_halted() {
        let gate = SampleGate::new();
        assert!(!gate.is_running());
        gate.start();
        assert!(gate.is_running());
        gate.stop();
        assert!(!gate.is_running());
    }
}
