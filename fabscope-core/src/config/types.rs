//! Configuration type definitions

/// Shortest supported sample period (µs); one conversion plus the tick
pub const MIN_SAMPLE_PERIOD_US: u32 = 4;

/// Longest supported sample period (µs)
pub const MAX_SAMPLE_PERIOD_US: u32 = 1_000_000;

/// Default trigger reference duty (mid-scale)
pub const DEFAULT_TRIGGER_LEVEL: u8 = 128;

/// Default host link baud rate
pub const DEFAULT_BAUDRATE: u32 = 115_200;

/// Instrument configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScopeConfig {
    /// Time between sample ticks (µs)
    pub sample_period_us: u32,
    /// Host serial link baud rate
    pub baudrate: u32,
    /// Trigger reference duty applied at boot
    pub trigger_level: u8,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            sample_period_us: 20,
            baudrate: DEFAULT_BAUDRATE,
            trigger_level: DEFAULT_TRIGGER_LEVEL,
        }
    }
}

impl ScopeConfig {
    /// Sample rate implied by the period (Hz)
    pub fn sample_rate_hz(&self) -> u32 {
        1_000_000 / self.sample_period_us.max(1)
    }

    /// Time covered by one capture window (µs)
    pub fn window_us(&self, len: usize) -> u64 {
        self.sample_period_us as u64 * len as u64
    }
}
