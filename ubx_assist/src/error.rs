use std::io;
use thiserror::Error;

/// Why a candidate frame was not forwarded to the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Leading byte is not the UBX-MGA class
    #[error("Non-Multiple GNSS Assistance message, class {class:#04x}")]
    WrongClass { class: u8 },
    /// `received` is `None` when the candidate is too short to carry a checksum
    #[error("UBX checksum mismatch, expect {calculated:02x?}, got {received:02x?}")]
    BadChecksum {
        calculated: (u8, u8),
        received: Option<(u8, u8)>,
    },
}

/// A `CFG-` directive line whose payload could not be turned into bytes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CfgLineError {
    #[error("line {line}: malformed hex in {directive}: {source}")]
    MalformedHex {
        line: usize,
        directive: String,
        source: HexPayloadError,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexPayloadError {
    #[error("missing ' - ' separator before the payload")]
    MissingSeparator,
    #[error("empty payload")]
    Empty,
    #[error(transparent)]
    Decode(#[from] hex::FromHexError),
}

/// Errors that end a loader run
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Writing to the receiver failed, the link is presumed dead
    #[error("transport error: {0}")]
    Transport(#[source] io::Error),
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A single AssistNow endpoint could not deliver data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("server answered with HTTP status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistNowError {
    /// Every configured endpoint failed, in order of attempt
    #[error("AssistNow data unavailable after {} attempt(s)", .attempts.len())]
    UpstreamUnavailable { attempts: Vec<(String, FetchError)> },
}

pub type Result<T, E = LoaderError> = std::result::Result<T, E>;
