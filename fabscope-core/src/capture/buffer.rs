//! Fixed-capacity circular sample buffer
//!
//! Storage is never reordered. The chronological view is computed from
//! the write cursor: the slot at `head` is the oldest sample, the slot
//! just before it the newest.

/// Circular buffer of `N` 8-bit samples
#[derive(Debug, Clone)]
pub struct CaptureBuffer<const N: usize> {
    samples: [u8; N],
    /// Next slot to be written
    head: usize,
}

impl<const N: usize> Default for CaptureBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CaptureBuffer<N> {
    const NON_EMPTY: () = assert!(N > 0, "capture buffer needs at least one slot");

    /// Create a zero-filled buffer with the cursor at slot 0
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            samples: [0; N],
            head: 0,
        }
    }

    /// Buffer capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Index of the next slot to be written
    pub fn head(&self) -> usize {
        self.head
    }

    /// Store a sample at the cursor without moving it
    pub fn store(&mut self, sample: u8) {
        self.samples[self.head] = sample;
    }

    /// Move the cursor to the next slot, wrapping at `N`
    pub fn advance(&mut self) {
        self.head = (self.head + 1) % N;
    }

    /// Index `distance` slots ahead of the cursor, modulo `N`
    pub fn offset(&self, distance: usize) -> usize {
        (self.head + distance % N) % N
    }

    /// Raw sample at a storage index
    pub fn get(&self, index: usize) -> Option<u8> {
        self.samples.get(index).copied()
    }

    /// Samples in chronological order as two contiguous runs
    ///
    /// The first slice holds `head..N`, the second `0..head`.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let (newer, older) = self.samples.split_at(self.head);
        (older, newer)
    }

    /// Iterate samples oldest first
    pub fn window(&self) -> impl Iterator<Item = u8> + '_ {
        let (older, newer) = self.as_slices();
        older.iter().chain(newer.iter()).copied()
    }

    /// Copy the chronological window into `out`
    pub fn copy_window(&self, out: &mut [u8; N]) {
        let (older, newer) = self.as_slices();
        out[..older.len()].copy_from_slice(older);
        out[older.len()..].copy_from_slice(newer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled<const N: usize>(writes: usize) -> CaptureBuffer<N> {
        let mut buffer = CaptureBuffer::<N>::new();
        for i in 0..writes {
            buffer.store(i as u8);
            buffer.advance();
        }
        buffer
    }

    #[test]
    fn test_new_buffer() {
        let buffer = CaptureBuffer::<8>::new();
        assert_eq!(buffer.head(), 0);
        assert_eq!(buffer.capacity(), 8);
        assert!(buffer.window().all(|s| s == 0));
    }

    #[test]
    fn test_head_wraps() {
        let buffer = filled::<4>(5);
        assert_eq!(buffer.head(), 1);
        // Slot 0 was overwritten by the fifth write
        assert_eq!(buffer.get(0), Some(4));
        assert_eq!(buffer.get(4), None);
    }

    #[test]
    fn test_window_is_chronological() {
        let buffer = filled::<4>(6);
        // Writes 2, 3, 4, 5 survive; head = 2
        assert_eq!(buffer.head(), 2);
        let mut out = [0u8; 4];
        buffer.copy_window(&mut out);
        assert_eq!(out, [2, 3, 4, 5]);
    }

    #[test]
    fn test_offset() {
        let buffer = filled::<1024>(1000);
        assert_eq!(buffer.offset(512), 488);
        assert_eq!(buffer.offset(0), 1000);
        assert_eq!(buffer.offset(1024 + 3), 1003);
    }

    proptest! {
        #[test]
        fn prop_full_lap_returns_head(start in 0usize..1024) {
            let mut buffer = filled::<1024>(start);
            let head = buffer.head();
            let mut written = [0u8; 1024];
            for _ in 0..1024 {
                written[buffer.head()] += 1;
                buffer.store(0xAA);
                buffer.advance();
            }
            prop_assert_eq!(buffer.head(), head);
            prop_assert!(written.iter().all(|&count| count == 1));
        }

        #[test]
        fn prop_window_order(k in 0usize..64) {
            let mut buffer = CaptureBuffer::<64>::new();
            for i in 0..64 {
                buffer.store(i as u8);
                buffer.advance();
            }
            for _ in 0..k {
                buffer.advance();
            }
            prop_assert_eq!(buffer.head(), k % 64);
            let expected = (k..64).chain(0..k).map(|i| i as u8);
            prop_assert!(buffer.window().eq(expected));
        }
    }
}
