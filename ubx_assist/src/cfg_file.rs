//! Loader for configuration files saved from u-center
//!
//! Such a file holds one message per line, e.g.
//! `CFG-RATE - 06 08 06 00 E8 03 01 00 01 00`: the directive name, then the
//! class, id, length and payload as hex pairs. The checksum is not part of
//! the line and is computed here before sending.

use crate::{
    checksum::frame_message,
    constants::{
        CFG_DIRECTIVE_PREFIX, CFG_PAYLOAD_SEPARATOR, CFG_RESET_DIRECTIVE_PREFIX,
        CFG_RESET_SETTLE_DELAY,
    },
    dispatch::{Pacer, ThreadSleep},
    error::{CfgLineError, HexPayloadError, LoaderError, Result},
};
use std::io::{BufRead, Write};
use tracing::{debug, error, info};

/// One significant line of a configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfgMessage {
    /// Directive as written in the file, e.g. `CFG-RATE`
    pub name: String,
    /// Class, id, length and payload, without sync chars or checksum
    pub body: Vec<u8>,
}

impl CfgMessage {
    /// The receiver resets after this message and needs time to come back
    pub fn is_reset(&self) -> bool {
        self.name.starts_with(CFG_RESET_DIRECTIVE_PREFIX)
    }

    /// Sync chars, body and checksum, ready to be written
    pub fn to_frame(&self) -> Vec<u8> {
        frame_message(&self.body)
    }
}

/// Parses a single line, `line_no` is only used for error reporting.
///
/// Returns `None` for lines that are not `CFG-` directives.
pub fn parse_cfg_line(line: &str, line_no: usize) -> Option<Result<CfgMessage, CfgLineError>> {
    if !line.starts_with(CFG_DIRECTIVE_PREFIX) {
        return None;
    }
    // Only the second field is the payload, anything after a further
    // separator is a trailing comment
    let mut fields = line.split(CFG_PAYLOAD_SEPARATOR);
    let name = fields.next().unwrap_or_default().trim_end();
    let payload = fields.next();
    let malformed = |source| CfgLineError::MalformedHex {
        line: line_no,
        directive: name.to_string(),
        source,
    };

    let Some(payload) = payload else {
        return Some(Err(malformed(HexPayloadError::MissingSeparator)));
    };
    // u-center separates the pairs with single spaces, be lenient about other whitespace
    let digits: String = payload.split_ascii_whitespace().collect();
    if digits.is_empty() {
        return Some(Err(malformed(HexPayloadError::Empty)));
    }
    Some(
        hex::decode(digits)
            .map(|body| CfgMessage {
                name: name.to_string(),
                body,
            })
            .map_err(|e| malformed(e.into())),
    )
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CfgLoadReport {
    pub sent: usize,
    pub resets: usize,
    pub malformed: usize,
}

/// Sends every `CFG-` line of a configuration file to the receiver.
///
/// Lines are sent as soon as they are read, without pacing, except after a
/// `CFG-RST` line, which is followed by a fixed settling pause.
pub struct CfgFileLoader<W, P = ThreadSleep> {
    sink: W,
    pacer: P,
}

impl<W: Write> CfgFileLoader<W, ThreadSleep> {
    pub fn new(sink: W) -> Self {
        Self::with_pacer(sink, ThreadSleep)
    }
}

impl<W: Write, P: Pacer> CfgFileLoader<W, P> {
    pub fn with_pacer(sink: W, pacer: P) -> Self {
        Self { sink, pacer }
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<CfgLoadReport> {
        let mut report = CfgLoadReport::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let msg = match parse_cfg_line(&line, idx + 1) {
                None => continue,
                Some(Ok(msg)) => msg,
                Some(Err(e)) => {
                    error!("{e}, skipping line");
                    report.malformed += 1;
                    continue;
                },
            };

            let frame = msg.to_frame();
            debug!("Sending {}: {}", msg.name, hex::encode(&frame));
            self.sink
                .write_all(&frame)
                .and_then(|_| self.sink.flush())
                .map_err(LoaderError::Transport)?;
            report.sent += 1;

            if msg.is_reset() {
                info!(
                    "{} sent, giving the receiver {:?} to reset",
                    msg.name, CFG_RESET_SETTLE_DELAY
                );
                self.pacer.pause(CFG_RESET_SETTLE_DELAY);
                report.resets += 1;
            }
        }
        Ok(report)
    }
}
