//! Trigger qualification
//!
//! Decides, once per tick, whether the comparator has produced an edge
//! worth capturing. The decision is pure; storing the stop index is the
//! controller's job.

use super::history::ComparatorHistory;
use super::state::TriggerState;

/// History pattern meaning "below threshold for eight readings"
pub const QUIET_BASELINE: u8 = 0x00;

/// Trigger qualification policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Qualifier {
    /// Debounced rising edge
    ///
    /// Fires when the history equals `baseline` and the comparator reads
    /// high at the current instant. A noisy level that never settles into
    /// the baseline never fires.
    DebouncedRising {
        /// Required history contents before the edge
        baseline: u8,
    },
}

impl Default for Qualifier {
    fn default() -> Self {
        Self::rising()
    }
}

impl Qualifier {
    /// Rising edge after eight quiet readings
    pub const fn rising() -> Self {
        Qualifier::DebouncedRising {
            baseline: QUIET_BASELINE,
        }
    }

    /// Check whether a trigger should newly arm
    ///
    /// Never fires unless the state is idle.
    pub fn fires(
        &self,
        history: ComparatorHistory,
        state: TriggerState,
        comparator_high: bool,
    ) -> bool {
        if !state.is_idle() {
            return false;
        }

        match *self {
            Qualifier::DebouncedRising { baseline } => {
                history.matches(baseline) && comparator_high
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: ComparatorHistory = ComparatorHistory::from_bits(0);

    #[test]
    fn test_fires_on_clean_edge() {
        let q = Qualifier::rising();
        assert!(q.fires(QUIET, TriggerState::Idle, true));
    }

    #[test]
    fn test_needs_high_now() {
        let q = Qualifier::rising();
        assert!(!q.fires(QUIET, TriggerState::Idle, false));
    }

    #[test]
    fn test_needs_full_quiet_history() {
        let q = Qualifier::rising();
        for bit in 0..8 {
            let history = ComparatorHistory::from_bits(1 << bit);
            assert!(!q.fires(history, TriggerState::Idle, true));
        }
        assert!(!q.fires(ComparatorHistory::new(), TriggerState::Idle, true));
    }

    #[test]
    fn test_only_from_idle() {
        let q = Qualifier::rising();
        assert!(!q.fires(QUIET, TriggerState::Armed { stop_index: 0 }, true));
        assert!(!q.fires(QUIET, TriggerState::Frozen, true));
    }

    #[test]
    fn test_custom_baseline() {
        let q = Qualifier::DebouncedRising { baseline: 0xF0 };
        assert!(q.fires(ComparatorHistory::from_bits(0xF0), TriggerState::Idle, true));
        assert!(!q.fires(QUIET, TriggerState::Idle, true));
    }
}
