//! Per-tick capture controller
//!
//! Runs once for every sample at interrupt priority. Each tick:
//!
//! 1. stores the sample at the cursor
//! 2. releases a frozen window (first tick after freezing), or
//! 3. freezes if armed and the cursor sits on the stop index, or
//! 4. asks the qualifier whether to arm
//! 5. advances the cursor
//! 6. shifts the comparator reading into the history
//!
//! The qualifier never sees the tick that froze, and a stale frozen state
//! is released before the qualifier runs. Unless the tick source is halted
//! right after freezing, step 2 starts overwriting the frozen window.

use fabscope_protocol::CAPTURE_LEN;

use super::buffer::CaptureBuffer;
use super::history::ComparatorHistory;
use super::qualifier::Qualifier;
use super::state::{TriggerEvent, TriggerState};

/// What a single tick did to the trigger state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Sample stored, state unchanged
    Sampled,
    /// Qualifier fired
    Armed {
        /// Index the window will end on
        stop_index: usize,
    },
    /// Window complete
    Frozen,
    /// A frozen window was released back to idle
    Released,
}

/// Capture context: buffer, comparator history and trigger state
#[derive(Debug, Clone)]
pub struct CaptureController<const N: usize = CAPTURE_LEN> {
    buffer: CaptureBuffer<N>,
    history: ComparatorHistory,
    state: TriggerState,
    qualifier: Qualifier,
    /// Ticks processed (wrapping)
    ticks: u32,
    /// Windows frozen since boot (wrapping)
    captures: u32,
}

impl<const N: usize> Default for CaptureController<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CaptureController<N> {
    /// Create a controller in the power-on state
    pub const fn new() -> Self {
        Self {
            buffer: CaptureBuffer::new(),
            history: ComparatorHistory::new(),
            state: TriggerState::Idle,
            qualifier: Qualifier::rising(),
            ticks: 0,
            captures: 0,
        }
    }

    /// Process one sample tick
    pub fn tick(&mut self, sample: u8, comparator_high: bool) -> TickOutcome {
        let head = self.buffer.head();
        self.buffer.store(sample);

        let state = self.state;
        let outcome = match state {
            TriggerState::Frozen => {
                self.apply(TriggerEvent::Released);
                TickOutcome::Released
            }
            TriggerState::Armed { stop_index } if head == stop_index => {
                self.apply(TriggerEvent::WindowComplete);
                self.captures = self.captures.wrapping_add(1);
                TickOutcome::Frozen
            }
            state if self.qualifier.fires(self.history, state, comparator_high) => {
                let stop_index = self.buffer.offset(N / 2);
                self.apply(TriggerEvent::Qualified { stop_index });
                TickOutcome::Armed { stop_index }
            }
            _ => TickOutcome::Sampled,
        };

        self.buffer.advance();
        self.history.push(comparator_high);
        self.ticks = self.ticks.wrapping_add(1);

        outcome
    }

    /// Return a frozen controller to idle
    ///
    /// Called by the consumer once it has read the window. Returns whether
    /// the controller was still frozen.
    pub fn rearm(&mut self) -> bool {
        let was_frozen = self.state.is_frozen();
        self.apply(TriggerEvent::Released);
        was_frozen
    }

    fn apply(&mut self, event: TriggerEvent) {
        self.state = self.state.transition(event);
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_frozen(&self) -> bool {
        self.state.is_frozen()
    }

    /// Index of the next slot to be written
    pub fn head(&self) -> usize {
        self.buffer.head()
    }

    pub fn history(&self) -> ComparatorHistory {
        self.history
    }

    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    pub fn buffer(&self) -> &CaptureBuffer<N> {
        &self.buffer
    }

    /// Ticks processed since boot
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Windows frozen since boot
    pub fn captures(&self) -> u32 {
        self.captures
    }
}
