//! Human readable names for UBX-MGA messages, used for verbose output
//!
//! The labels are kept byte for byte identical to the ones printed by the
//! earlier loader scripts so logs stay comparable.

use crate::{constants::UBX_CLASS_MGA, frame::MgaFrame};
use core::fmt;

/// How the type byte (offset 4) has to look for a label to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgTypeMatch {
    Exact(u8),
    /// The family has a single label whatever the type byte
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLabel {
    pub class: u8,
    pub msg_id: u8,
    pub msg_type: MsgTypeMatch,
    pub label: &'static str,
}

const fn label(msg_id: u8, msg_type: u8, label: &'static str) -> MessageLabel {
    MessageLabel {
        class: UBX_CLASS_MGA,
        msg_id,
        msg_type: MsgTypeMatch::Exact(msg_type),
        label,
    }
}

const fn family_label(msg_id: u8, label: &'static str) -> MessageLabel {
    MessageLabel {
        class: UBX_CLASS_MGA,
        msg_id,
        msg_type: MsgTypeMatch::Any,
        label,
    }
}

/// Every MGA message the loader knows a name for
pub static MGA_MESSAGE_LABELS: &[MessageLabel] = &[
    // UBX-MGA-GPS
    label(0x00, 0x01, "UBX-MGA-GPS-EPH: GPS Ephemeris Assistance"),
    label(0x00, 0x02, "UBX-MGA-GPS-ALM: GPS Almanac Assistance"),
    label(0x00, 0x04, "UBX-MGA-GPS-HEALTH: GPS Health Assistance"),
    label(0x00, 0x05, "UBX-MGA-GPS-UTC: GPS UTC Assistance"),
    label(0x00, 0x06, "UBX-MGA-GPS-IONO: GPS Ionosphere Assistance"),
    // UBX-MGA-GAL
    label(0x02, 0x01, "UBX-MGA-GAL-EPH: Galileo Ephemeris Assistance"),
    label(0x02, 0x02, "UBX-MGA-GAL-ALM: Galileo Almanac Assistance"),
    label(
        0x02,
        0x03,
        "UBX-MGA-GAL-TIMEOFFSET: Galileo GPS time offset assistance",
    ),
    label(0x02, 0x05, "UBX-MGA-GAL-UTC: Galileo UTC Assistance"),
    // UBX-MGA-BDS
    label(0x03, 0x01, "UBX-MGA-BDS-EPH: BDS Ephemeris Assistance"),
    label(0x03, 0x02, "UBX-MGA-BDS-ALM: BDS Almanac Assistance"),
    label(0x03, 0x04, "UBX-MGA-BDS-HEALTH: BDS Health Assistance"),
    label(0x03, 0x05, "UBX-MGA-BDS-UTC: BDS UTC Assistance"),
    label(0x03, 0x06, "UBX-MGA-BDS-IONO: BDS Ionospheric Assistance"),
    // UBX-MGA-QZSS
    label(0x05, 0x01, "UBX-MGA-QZSS-EPH: QZSS Ephemeris Assistance"),
    label(0x05, 0x02, "UBX-MGA-QZSS-ALM: QZSS Almanac Assistance"),
    label(0x05, 0x04, "UBX-MGA-QZSS-HEALTH: QZSS Health Assistance"),
    // UBX-MGA-GLO
    label(0x06, 0x01, "UBX-MGA-GLO-EPH: GLONASS Ephemeris Assistance"),
    label(0x06, 0x02, "UBX-MGA-GLO-ALM: GLONASS Almanac Assistance"),
    label(
        0x06,
        0x03,
        "UBX-MGA-GLO-TIMEOFFSET: GLONASS Auxiliary Time Offset Assistance",
    ),
    // UBX-MGA-ANO
    label(
        0x20,
        0x00,
        "UBX-MGA-ANO: Multiple GNSS AssistNow Offline Assistance",
    ),
    // UBX-MGA-FLASH
    label(
        0x21,
        0x01,
        "UBX-MGA-FLASH-DATA: Transfer MGA-ANO data block to flash",
    ),
    label(0x21, 0x02, "UBX-MGA-FLASH-STOP: Finish flashing MGA-ANO data"),
    // Sent by the receiver, not expected from AssistNow
    label(
        0x21,
        0x03,
        "UBX-MGA-FLASH-ACK: Acknowledge last FLASH-DATA or -STOP",
    ),
    // UBX-MGA-INI
    label(0x40, 0x00, "UBX-MGA-INI-POS_XYZ: Initial Position Assistance"),
    label(0x40, 0x01, "UBX-MGA-INI-POS_LLH: Initial Position Assistance"),
    label(0x40, 0x10, "UBX-MGA-INI-TIME_UTC: Initial Time Assistance"),
    label(0x40, 0x11, "UBX-MGA-INI-TIME_GNSS: Initial Time Assistance"),
    label(0x40, 0x20, "UBX-MGA-INI-CLKD: Initial Clock Drift Assistance"),
    label(0x40, 0x21, "UBX-MGA-INI-FREQ: Initial Frequency Assistance"),
    label(
        0x40,
        0x30,
        "UBX-MGA-INI-EOP: Earth Orientation Parameters Assistance",
    ),
    // Sent by the receiver, not expected from AssistNow
    family_label(0x60, "UBX-MGA-ACK-DATA0: Multiple GNSS Acknowledge message"),
    family_label(0x80, "UBX-MGA-DBD: Navigation Database Dump Entry"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Known(&'static str),
    /// Carries the hex dump of the frame, sync chars included
    Unknown(String),
}

impl Classification {
    pub fn is_known(&self) -> bool {
        matches!(self, Classification::Known(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Known(label) => f.write_str(label),
            Classification::Unknown(hex) => write!(f, "Unknown Message: {}", hex),
        }
    }
}

/// Looks up the label of a raw candidate.
///
/// Offsets are taken from the candidate as split, checksum included, the
/// same way the labels were originally assigned. For a frame with an empty
/// payload the byte at offset 4 is therefore the first checksum byte.
pub fn lookup(candidate: &[u8]) -> Option<&'static MessageLabel> {
    let (class, msg_id) = match candidate {
        [class, msg_id, ..] => (*class, *msg_id),
        _ => return None,
    };
    let msg_type = candidate.get(4).copied();
    MGA_MESSAGE_LABELS.iter().find(|entry| {
        entry.class == class
            && entry.msg_id == msg_id
            && match entry.msg_type {
                MsgTypeMatch::Any => true,
                MsgTypeMatch::Exact(t) => msg_type == Some(t),
            }
    })
}

pub fn classify(frame: &MgaFrame<'_>) -> Classification {
    match lookup(frame.as_bytes()) {
        Some(entry) => Classification::Known(entry.label),
        None => Classification::Unknown(frame.to_hex()),
    }
}
