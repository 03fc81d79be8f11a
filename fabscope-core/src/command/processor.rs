//! Command processor
//!
//! Reads request bytes from the host link and dispatches:
//!
//! - read: wait for a frozen window, halt sampling, stream the window
//!   oldest sample first, re-arm, resume sampling
//! - trigger level: write the decoded value to the reference PWM
//!
//! Both waits (byte arrival, frozen window) spin without timeout. Once a
//! command has been recognised it always runs to completion.

use fabscope_hal::{DutyOutput, SampleClock, UartRx, UartTx};
use fabscope_protocol::{Command, CommandParser, CAPTURE_LEN};

use crate::capture::{SharedCapture, Snapshot};

/// Errors from the host link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessError<R, T> {
    /// Reading a request byte failed
    Receive(R),
    /// Streaming the window failed
    Transmit(T),
}

/// What an executed command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// A window was streamed to the host
    Dumped(Snapshot),
    /// The trigger reference duty was written
    TriggerSet(u8),
}

/// Foreground command loop state
pub struct CommandProcessor<'a, Rx, Tx, P, C, const N: usize = CAPTURE_LEN> {
    rx: Rx,
    tx: Tx,
    trigger: P,
    clock: C,
    capture: &'a SharedCapture<N>,
    parser: CommandParser,
    /// Copy of the frozen window being streamed
    window: [u8; N],
}

impl<'a, Rx, Tx, P, C, const N: usize> CommandProcessor<'a, Rx, Tx, P, C, N>
where
    Rx: UartRx,
    Tx: UartTx,
    P: DutyOutput,
    C: SampleClock,
{
    /// Create a new command processor
    pub fn new(rx: Rx, tx: Tx, trigger: P, clock: C, capture: &'a SharedCapture<N>) -> Self {
        Self {
            rx,
            tx,
            trigger,
            clock,
            capture,
            parser: CommandParser::new(),
            window: [0; N],
        }
    }

    /// Read one request byte and execute the command it completes, if any
    pub fn poll(&mut self) -> Result<Option<Response>, ProcessError<Rx::Error, Tx::Error>> {
        let byte = self.rx.read_byte().map_err(ProcessError::Receive)?;

        match self.parser.feed(byte) {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Execute a decoded command
    pub fn execute(
        &mut self,
        command: Command,
    ) -> Result<Response, ProcessError<Rx::Error, Tx::Error>> {
        match command {
            Command::Read => self
                .dump()
                .map(Response::Dumped)
                .map_err(ProcessError::Transmit),
            Command::SetTrigger(level) => {
                self.trigger.set_duty(level);
                Ok(Response::TriggerSet(level))
            }
        }
    }

    /// Stream the next frozen window to the host
    ///
    /// Blocks until the producer freezes a window. Sampling is resumed and
    /// the trigger re-armed even if the transmit fails.
    pub fn dump(&mut self) -> Result<Snapshot, Tx::Error> {
        self.capture.wait_frozen();
        self.clock.stop();

        let snapshot = self.capture.snapshot(&mut self.window);
        let sent = self
            .tx
            .write_blocking(&self.window)
            .and_then(|()| self.tx.flush());

        self.capture.rearm();
        self.clock.start();

        sent.map(|()| snapshot)
    }

    /// Check whether a trigger command is partially received
    pub fn is_pending(&self) -> bool {
        self.parser.is_pending()
    }

    pub fn trigger(&self) -> &P {
        &self.trigger
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Consume the processor and return the host link halves
    pub fn into_parts(self) -> (Rx, Tx, P, C) {
        (self.rx, self.tx, self.trigger, self.clock)
    }
}
