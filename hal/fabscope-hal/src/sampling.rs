//! Analog sampling abstractions
//!
//! Sampling is free-running: once the clock is started, a conversion
//! completes every sample period and the capture core runs once for it.

/// The periodic tick source driving the capture core
///
/// Stopping the clock is the only way the foreground may gain read access
/// to the capture buffer. Implementations must guarantee that once
/// [`SampleClock::stop`] returns, no further tick begins until
/// [`SampleClock::start`] is called. A tick already in progress may finish.
pub trait SampleClock {
    /// Start (or resume) free-running conversions
    fn start(&self);

    /// Halt conversions
    fn stop(&self);

    /// Check whether ticks are currently being produced
    fn is_running(&self) -> bool;
}

impl<T: SampleClock + ?Sized> SampleClock for &T {
    fn start(&self) {
        (**self).start()
    }

    fn stop(&self) {
        (**self).stop()
    }

    fn is_running(&self) -> bool {
        (**self).is_running()
    }
}

/// One analog channel reduced to 8-bit magnitudes
pub trait SampleSource {
    /// Perform (or collect) one conversion
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_sample(&mut self) -> u8;
}
