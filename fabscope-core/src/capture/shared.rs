//! Capture context shared across the interrupt boundary
//!
//! Single producer (the sampler tick), single consumer (the command loop).
//! The producer owns all mutation. The consumer polls a lock-free frozen
//! flag and, once it has halted the sample clock, copies the window out.
//!
//! The controller sits behind a critical-section mutex so that the static
//! is `Sync`; with the clock halted the consumer's lock never contends
//! with a tick, and the producer never waits on the consumer.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;
use fabscope_protocol::CAPTURE_LEN;
use portable_atomic::{AtomicBool, Ordering};

use super::controller::{CaptureController, TickOutcome};
use super::state::TriggerState;

/// Result of copying the window out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Cursor position at copy time (storage index of the oldest sample)
    pub head: usize,
    /// Whether the window was still frozen when copied
    ///
    /// `false` means a tick released the window between the frozen check
    /// and the clock halt, and the copy contains fresh samples.
    pub intact: bool,
}

/// The capture controller plus its published frozen flag
pub struct SharedCapture<const N: usize = CAPTURE_LEN> {
    inner: CriticalSectionMutex<RefCell<CaptureController<N>>>,
    frozen: AtomicBool,
}

impl<const N: usize> Default for SharedCapture<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SharedCapture<N> {
    /// Create a shared context in the power-on state
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionMutex::new(RefCell::new(CaptureController::new())),
            frozen: AtomicBool::new(false),
        }
    }

    /// Producer side: run one tick and publish the frozen flag
    pub fn tick(&self, sample: u8, comparator_high: bool) -> TickOutcome {
        self.inner.lock(|cell| {
            let mut controller = cell.borrow_mut();
            let outcome = controller.tick(sample, comparator_high);
            self.frozen.store(controller.is_frozen(), Ordering::Release);
            outcome
        })
    }

    /// Consumer side: check for a complete window without locking
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Acquire)
    }

    /// Consumer side: spin until a window is complete
    ///
    /// No timeout. Returns only if the producer keeps ticking and a
    /// qualified edge eventually arrives.
    pub fn wait_frozen(&self) {
        while !self.is_frozen() {
            core::hint::spin_loop();
        }
    }

    /// Consumer side: copy the window, oldest sample first
    ///
    /// The sample clock must be halted. The copy is taken regardless of
    /// state; [`Snapshot::intact`] reports whether it is the frozen window.
    pub fn snapshot(&self, out: &mut [u8; N]) -> Snapshot {
        self.inner.lock(|cell| {
            let controller = cell.borrow();
            controller.buffer().copy_window(out);
            Snapshot {
                head: controller.head(),
                intact: controller.is_frozen(),
            }
        })
    }

    /// Consumer side: release the window back to idle
    ///
    /// Returns whether it was still frozen.
    pub fn rearm(&self) -> bool {
        self.inner.lock(|cell| {
            let was_frozen = cell.borrow_mut().rearm();
            self.frozen.store(false, Ordering::Release);
            was_frozen
        })
    }

    /// Run a read-only closure against the controller
    pub fn with<R>(&self, f: impl FnOnce(&CaptureController<N>) -> R) -> R {
        self.inner.lock(|cell| f(&*cell.borrow()))
    }

    pub fn state(&self) -> TriggerState {
        self.with(|c| c.state())
    }

    pub fn head(&self) -> usize {
        self.with(|c| c.head())
    }
}
