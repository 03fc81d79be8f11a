//! Comparator bit history
//!
//! An 8-bit shift register: the most recent comparator reading lives in
//! bit 0 and the oldest falls off bit 7 on every push.

/// Rolling record of the last eight comparator readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComparatorHistory(u8);

impl Default for ComparatorHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparatorHistory {
    /// Power-on history
    ///
    /// Starts all high so that eight genuine low readings are needed
    /// before anything can qualify.
    pub const fn new() -> Self {
        Self(0xFF)
    }

    /// History with explicit contents
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw register contents
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Shift in a new reading, discarding the oldest
    pub fn push(&mut self, high: bool) {
        self.0 = (self.0 << 1) | high as u8;
    }

    /// Compare the whole register against a pattern
    pub fn matches(&self, pattern: u8) -> bool {
        self.0 == pattern
    }
}
