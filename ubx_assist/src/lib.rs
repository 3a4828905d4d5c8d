//! # ubx_assist
//!
//! Feeds assistance and configuration data to u-blox GNSS receivers over the UBX protocol.
//!
//! The crate covers the part of the job that deals with bytes: cutting an AssistNow Online
//! download into UBX frames, checking each frame, naming it for diagnostics and forwarding it
//! to the receiver at a pace its input buffer can follow. Opening the serial port and
//! downloading the data are left to the caller; see the `ubx_loader` binaries for both.
//!
//! Loading AssistNow data
//! ======================
//!
//! Anything implementing [`std::io::Write`] can stand in for the receiver:
//! ```
//! use std::time::Duration;
//! use ubx_assist::{frame_message, DispatchConfig, Dispatcher};
//!
//! // One UBX-MGA-GPS-EPH frame as it would come from the AssistNow service
//! let download = frame_message(&[0x13, 0x00, 0x01, 0x00, 0x01]);
//!
//! let config = DispatchConfig {
//!     inter_message_delay: Duration::from_millis(100),
//!     verbose: true,
//! };
//! let mut dispatcher = Dispatcher::with_pacer(Vec::new(), |_delay: Duration| {}, config);
//! let report = dispatcher.dispatch_stream(&download).unwrap();
//! assert_eq!(report.forwarded, 1);
//! assert_eq!(dispatcher.into_sink(), download);
//! ```
//! [`Dispatcher::new`] pauses with [`std::thread::sleep`] between frames.
//!
//! Frames that are not UBX-MGA or fail their checksum are logged through `tracing` and
//! skipped. A write error on the sink ends the run with [`LoaderError::Transport`].
//!
//! Frames by hand
//! ==============
//!
//! The building blocks are public as well:
//! ```
//! use ubx_assist::{classify, split_frames, ubx_checksum, validate, RejectReason};
//!
//! let stream = [0xb5, 0x62, 0x13, 0x00, 0x01, 0x00, 0x01, 0x15, 0x63, 0xb5, 0x62, 0x05, 0x01];
//! let mut candidates = split_frames(&stream);
//!
//! let frame = validate(candidates.next().unwrap()).unwrap();
//! assert_eq!(ubx_checksum(frame.body()), frame.checksum());
//! assert_eq!(
//!     classify(&frame).to_string(),
//!     "UBX-MGA-GPS-EPH: GPS Ephemeris Assistance"
//! );
//!
//! assert_eq!(
//!     validate(candidates.next().unwrap()),
//!     Err(RejectReason::WrongClass { class: 0x05 })
//! );
//! ```
//!
//! Configuration files
//! ===================
//!
//! [`CfgFileLoader`] sends the `CFG-` lines of a u-center configuration export, adding the
//! sync chars and checksum each line lacks, and waits for the receiver after a `CFG-RST`.

pub use crate::{
    assistnow::{fetch_with_fallback, AssistNowClient, AssistNowConfig, ConfigWarning, DEFAULT_ENDPOINTS},
    cfg_file::{parse_cfg_line, CfgFileLoader, CfgLoadReport, CfgMessage},
    checksum::{frame_message, ubx_checksum, UbxChecksumCalc},
    classifier::{classify, lookup, Classification, MessageLabel, MsgTypeMatch, MGA_MESSAGE_LABELS},
    dispatch::{DispatchConfig, DispatchReport, Dispatcher, Pacer, ThreadSleep},
    error::{
        AssistNowError, CfgLineError, FetchError, HexPayloadError, LoaderError, RejectReason,
    },
    frame::{wire_hex, MgaFrame},
    splitter::{split_frames, FrameSplitter},
    validator::validate,
};

pub mod assistnow;
mod cfg_file;
mod checksum;
mod classifier;
pub mod constants;
mod dispatch;
mod error;
mod frame;
mod splitter;
mod validator;
