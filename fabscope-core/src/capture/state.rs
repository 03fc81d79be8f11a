//! Trigger state machine
//!
//! ```text
//!          Qualified            WindowComplete
//!   Idle ─────────────▶ Armed ──────────────────▶ Frozen
//!    ▲                                              │
//!    └──────────────────── Released ────────────────┘
//! ```
//!
//! The stop index only exists while armed, so an idle state can never
//! carry a stale one.

/// Capture trigger states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerState {
    /// Free-running, waiting for a qualified edge
    #[default]
    Idle,
    /// Edge seen; capture ends when the cursor reaches `stop_index`
    Armed {
        /// Buffer index of the final sample of the window
        stop_index: usize,
    },
    /// Buffer holds a complete window
    Frozen,
}

/// Events that drive the trigger state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerEvent {
    /// The qualifier fired
    Qualified {
        /// Buffer index the window should end on
        stop_index: usize,
    },
    /// The cursor reached the stop index
    WindowComplete,
    /// The frozen window was consumed or abandoned
    Released,
}

impl TriggerState {
    pub fn is_idle(&self) -> bool {
        matches!(self, TriggerState::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, TriggerState::Armed { .. })
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, TriggerState::Frozen)
    }

    /// Pending stop index, if armed
    pub fn stop_index(&self) -> Option<usize> {
        match self {
            TriggerState::Armed { stop_index } => Some(*stop_index),
            _ => None,
        }
    }

    /// Process an event and return the next state
    ///
    /// Events that do not apply to the current state leave it unchanged;
    /// in particular a second qualification while armed cannot move the
    /// stop index.
    pub fn transition(self, event: TriggerEvent) -> Self {
        use TriggerEvent::*;
        use TriggerState::*;

        match (self, event) {
            (Idle, Qualified { stop_index }) => Armed { stop_index },
            (Armed { .. }, WindowComplete) => Frozen,
            (Frozen, Released) => Idle,

            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let state = TriggerState::default();
        assert!(state.is_idle());

        let armed = state.transition(TriggerEvent::Qualified { stop_index: 522 });
        assert_eq!(armed, TriggerState::Armed { stop_index: 522 });
        assert_eq!(armed.stop_index(), Some(522));

        let frozen = armed.transition(TriggerEvent::WindowComplete);
        assert!(frozen.is_frozen());
        assert_eq!(frozen.stop_index(), None);

        let idle = frozen.transition(TriggerEvent::Released);
        assert!(idle.is_idle());
        assert_eq!(idle.stop_index(), None);
    }

    #[test]
    fn test_stop_index_set_once() {
        let armed = TriggerState::Armed { stop_index: 10 };
        let next = armed.transition(TriggerEvent::Qualified { stop_index: 99 });
        assert_eq!(next, armed);
    }

    #[test]
    fn test_irrelevant_events_ignored() {
        assert!(TriggerState::Idle
            .transition(TriggerEvent::WindowComplete)
            .is_idle());
        assert!(TriggerState::Idle.transition(TriggerEvent::Released).is_idle());
        assert!(TriggerState::Frozen
            .transition(TriggerEvent::Qualified { stop_index: 0 })
            .is_frozen());
        assert!(TriggerState::Armed { stop_index: 3 }
            .transition(TriggerEvent::Released)
            .is_armed());
    }
}
