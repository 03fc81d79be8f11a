//! End-to-end capture scenarios
//!
//! Drive the shared capture context the way the sampler interrupt does and
//! read windows back through the command processor, checking the bytes a
//! host would receive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use fabscope_core::capture::{SampleGate, SharedCapture, TickOutcome, CAPTURE_LEN};
use fabscope_core::command::{CommandProcessor, Response};
use fabscope_hal::{DutyOutput, SampleClock, UartRx, UartTx};
use fabscope_protocol::{CaptureWindow, TRIGGER_POSITION};

#[derive(Debug, PartialEq)]
struct Closed;

struct ScriptRx {
    bytes: &'static [u8],
}

impl UartRx for ScriptRx {
    type Error = Closed;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Closed> {
        if self.bytes.len() < buf.len() {
            return Err(Closed);
        }
        let (head, rest) = self.bytes.split_at(buf.len());
        buf.copy_from_slice(head);
        self.bytes = rest;
        Ok(buf.len())
    }
}

#[derive(Default)]
struct HostTx {
    received: Vec<u8>,
}

impl UartTx for HostTx {
    type Error = Closed;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Closed> {
        self.received.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Closed> {
        Ok(())
    }
}

#[derive(Default)]
struct ReferencePwm {
    duty: u8,
}

impl DutyOutput for ReferencePwm {
    fn set_duty(&mut self, duty: u8) {
        self.duty = duty;
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}

fn sample_for(tick: usize) -> u8 {
    (tick % 200) as u8
}

/// Comparator low for ticks 0..10, high from tick 10 on
fn comparator_for(tick: usize) -> bool {
    tick >= 10
}

#[test]
fn test_rising_edge_capture_lifecycle() {
    let capture: SharedCapture = SharedCapture::new();
    let mut armed_at = None;
    let mut frozen_at = None;
    let mut released_at = None;

    for tick in 0..1100 {
        match capture.tick(sample_for(tick), comparator_for(tick)) {
            TickOutcome::Armed { stop_index } => {
                assert!(armed_at.is_none(), "armed twice");
                armed_at = Some((tick, stop_index));
            }
            TickOutcome::Frozen => frozen_at = Some(tick),
            TickOutcome::Released => released_at = Some(tick),
            TickOutcome::Sampled => {}
        }
    }

    // Eight lows were already in the history by tick 8, but the first
    // high only arrives at tick 10, stored at index 10.
    assert_eq!(armed_at, Some((10, 522)));
    assert_eq!(frozen_at, Some(522));
    assert_eq!(released_at, Some(523));

    // Comparator stays high: no fresh low run, no re-arm
    assert!(capture.state().is_idle());
    assert_eq!(capture.head(), 1100 % CAPTURE_LEN);
}

#[test]
fn test_frozen_window_read_by_host() {
    let capture: SharedCapture = SharedCapture::new();
    let clock = SampleGate::new();
    clock.start();

    // Producer halts on the freezing tick, as if the host had already
    // asked for a window.
    let mut tick = 0;
    while !capture.is_frozen() {
        capture.tick(sample_for(tick), comparator_for(tick));
        tick += 1;
    }
    assert_eq!(tick, 523);

    let rx = ScriptRx {
        bytes: b"xt007rt255",
    };
    let mut processor =
        CommandProcessor::new(rx, HostTx::default(), ReferencePwm::default(), &clock, &capture);

    let mut responses = Vec::new();
    while let Ok(response) = processor.poll() {
        responses.extend(response);
    }

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0], Response::TriggerSet(7));
    match responses[1] {
        Response::Dumped(snapshot) => {
            assert!(snapshot.intact);
            assert_eq!(snapshot.head, 523);
        }
        other => panic!("expected a dump, got {:?}", other),
    }
    assert_eq!(responses[2], Response::TriggerSet(255));

    let (_, tx, pwm, _) = processor.into_parts();
    assert_eq!(pwm.duty(), 255);
    assert_eq!(tx.received.len(), CAPTURE_LEN);

    let window = CaptureWindow::from_bytes(&tx.received).unwrap();
    let samples = window.samples();
    // Arming sample sits at the trigger position
    assert_eq!(samples[TRIGGER_POSITION], sample_for(10));
    // Last byte is the freezing tick's sample
    assert_eq!(samples[CAPTURE_LEN - 1], sample_for(522));
    // Slots never written before the first lap read as zero
    assert!(samples[..CAPTURE_LEN - 523].iter().all(|&s| s == 0));
    // Everything after that is the recorded ramp, oldest first
    for (offset, &s) in samples[CAPTURE_LEN - 523..].iter().enumerate() {
        assert_eq!(s, sample_for(offset));
    }

    // Re-armed, sampling resumed
    assert!(capture.state().is_idle());
    assert!(clock.is_running());
}

#[test]
fn test_window_after_full_lap() {
    let capture: SharedCapture = SharedCapture::new();

    // Quiet line for well over a lap, then a single rising edge
    let edge = 3000;
    let mut tick = 0;
    while !capture.is_frozen() {
        let sample = (tick % 251) as u8;
        capture.tick(sample, tick >= edge);
        tick += 1;
    }
    assert_eq!(tick, edge + CAPTURE_LEN / 2 + 1);

    let mut window = [0u8; CAPTURE_LEN];
    let snapshot = capture.snapshot(&mut window);
    assert!(snapshot.intact);

    let first = tick - CAPTURE_LEN;
    for (i, &s) in window.iter().enumerate() {
        assert_eq!(s, ((first + i) % 251) as u8);
    }
    assert_eq!(window[TRIGGER_POSITION], (edge % 251) as u8);
}

#[test]
fn test_dump_with_live_producer() {
    static CAPTURE: SharedCapture = SharedCapture::new();
    static GATE: SampleGate = SampleGate::new();
    static STOP: AtomicBool = AtomicBool::new(false);

    GATE.start();

    // Square wave on the comparator, 64 ticks per half period
    let producer = thread::spawn(|| {
        let mut tick: usize = 0;
        while !STOP.load(Ordering::Relaxed) {
            if GATE.is_running() {
                let high = (tick / 64) % 2 == 1;
                CAPTURE.tick(tick as u8, high);
                tick = tick.wrapping_add(1);
                thread::sleep(Duration::from_micros(5));
            } else {
                thread::yield_now();
            }
        }
    });

    let rx = ScriptRx { bytes: b"rr" };
    let mut processor = CommandProcessor::new(
        rx,
        HostTx::default(),
        ReferencePwm::default(),
        &GATE,
        &CAPTURE,
    );

    // Host threads cannot model interrupt priority, so only the framing is
    // checked here.
    for _ in 0..2 {
        assert!(matches!(processor.poll(), Ok(Some(Response::Dumped(_)))));
    }
    STOP.store(true, Ordering::Relaxed);
    producer.join().unwrap();

    let (_, tx, _, _) = processor.into_parts();
    assert_eq!(tx.received.len(), 2 * CAPTURE_LEN);
    assert!(GATE.is_running());
}
