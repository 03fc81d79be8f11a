//! Host command loop
//!
//! Blocking: the loop never yields, so it must own the thread-mode
//! executor. The sampler keeps running underneath it on the interrupt
//! executor.

use defmt::*;

use fabscope_core::capture::{SampleGate, SharedCapture};
use fabscope_core::command::{CommandProcessor, ProcessError, Response};
use fabscope_hal_rp2040::{SerialRx, SerialTx, TriggerPwm};

/// The command processor as wired on this board
pub type HostProcessor = CommandProcessor<
    'static,
    SerialRx<'static>,
    SerialTx<'static>,
    TriggerPwm<'static>,
    &'static SampleGate,
>;

/// Serve host requests forever
///
/// `capture` must be the context the processor dumps from; it is only
/// read here for statistics.
pub fn run_command_loop(processor: &mut HostProcessor, capture: &SharedCapture) -> ! {
    info!("Command loop started");

    loop {
        match processor.poll() {
            Ok(None) => {}
            Ok(Some(Response::Dumped(snapshot))) => {
                let (captures, ticks) = capture.with(|c| (c.captures(), c.ticks()));
                if snapshot.intact {
                    debug!(
                        "Capture {} sent (head {}, {} ticks)",
                        captures, snapshot.head, ticks
                    );
                } else {
                    warn!("Capture {} released before halt, sent fresh samples", captures);
                }
            }
            Ok(Some(Response::TriggerSet(level))) => {
                info!("Trigger level set to {}", level);
            }
            Err(ProcessError::Receive(e)) => {
                warn!("Host receive error: {:?}", e);
            }
            Err(ProcessError::Transmit(e)) => {
                warn!("Host transmit error: {:?}", e);
            }
        }
    }
}
