use crate::{
    classifier::classify,
    constants::{DEFAULT_INTER_MESSAGE_DELAY, UBX_SYNC_MARKER},
    error::{LoaderError, RejectReason, Result},
    frame::wire_hex,
    splitter::split_frames,
    validator::validate,
};
use std::{io::Write, time::Duration};
use tracing::{debug, info, warn};

/// Blocking wait between two writes to the receiver
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Implement pacer for simple callbacks / closures
impl<F: FnMut(Duration)> Pacer for F {
    fn pause(&mut self, delay: Duration) {
        self(delay)
    }
}

/// Sleeps the current thread, the receiver needs the time to drain its buffers
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    pub inter_message_delay: Duration,
    /// Log the label of every forwarded message
    pub verbose: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            inter_message_delay: DEFAULT_INTER_MESSAGE_DELAY,
            verbose: false,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub forwarded: usize,
    pub wrong_class: usize,
    pub bad_checksum: usize,
}

impl DispatchReport {
    pub fn rejected(&self) -> usize {
        self.wrong_class + self.bad_checksum
    }

    fn record_reject(&mut self, reason: &RejectReason) {
        match reason {
            RejectReason::WrongClass { .. } => self.wrong_class += 1,
            RejectReason::BadChecksum { .. } => self.bad_checksum += 1,
        }
    }
}

/// Forwards validated UBX-MGA frames to the receiver, one at a time.
///
/// The sink is typically an open serial port. Frames already written stay
/// written if a later write fails; the run simply stops there.
pub struct Dispatcher<W, P = ThreadSleep> {
    sink: W,
    pacer: P,
    config: DispatchConfig,
}

impl<W: Write> Dispatcher<W, ThreadSleep> {
    pub fn new(sink: W, config: DispatchConfig) -> Self {
        Self::with_pacer(sink, ThreadSleep, config)
    }
}

impl<W: Write, P: Pacer> Dispatcher<W, P> {
    pub fn with_pacer(sink: W, pacer: P, config: DispatchConfig) -> Self {
        Self {
            sink,
            pacer,
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Splits `stream` on the sync marker and dispatches every piece
    pub fn dispatch_stream(&mut self, stream: &[u8]) -> Result<DispatchReport> {
        self.dispatch(split_frames(stream))
    }

    /// Dispatches candidate bodies (sync marker already stripped).
    ///
    /// Rejected candidates are logged and skipped without delay. A failing
    /// write aborts with [`LoaderError::Transport`].
    pub fn dispatch<'a, I>(&mut self, candidates: I) -> Result<DispatchReport>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut report = DispatchReport::default();
        for candidate in candidates {
            let frame = match validate(candidate) {
                Ok(frame) => frame,
                Err(reason) => {
                    warn!("{reason}, skipping: {}", wire_hex(candidate));
                    report.record_reject(&reason);
                    continue;
                },
            };

            if self.config.verbose {
                info!("{}", classify(&frame));
            }

            self.write_frame(frame.as_bytes())?;
            report.forwarded += 1;
            debug!(
                "Forwarded {} bytes, pausing {:?}",
                frame.as_bytes().len() + UBX_SYNC_MARKER.len(),
                self.config.inter_message_delay
            );
            self.pacer.pause(self.config.inter_message_delay);
        }
        Ok(report)
    }

    fn write_frame(&mut self, candidate: &[u8]) -> Result<()> {
        self.sink
            .write_all(&UBX_SYNC_MARKER)
            .and_then(|_| self.sink.write_all(candidate))
            .and_then(|_| self.sink.flush())
            .map_err(LoaderError::Transport)
    }
}
