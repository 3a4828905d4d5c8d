use crate::constants::{
    UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_LENGTH_OFFSET, UBX_MSG_ID_OFFSET, UBX_PAYLOAD_OFFSET,
    UBX_SYNC_MARKER,
};
use core::fmt;

/// A validated candidate, borrowed from the stream it was split from.
///
/// Obtained through [`validate`](crate::validate), which guarantees the
/// leading class byte and the trailing checksum pair. Everything in between
/// is read as-is: the length field is reported but never enforced, so the
/// accessors that need header bytes return `Option`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MgaFrame<'a> {
    raw: &'a [u8],
}

impl<'a> MgaFrame<'a> {
    /// `raw` must hold at least the class byte and the checksum pair
    pub(crate) fn new(raw: &'a [u8]) -> Self {
        debug_assert!(raw.len() > UBX_CHECKSUM_LEN);
        Self { raw }
    }

    pub fn class(&self) -> u8 {
        self.raw[UBX_CLASS_OFFSET]
    }

    pub fn msg_id(&self) -> Option<u8> {
        self.body().get(UBX_MSG_ID_OFFSET).copied()
    }

    /// Little endian length field as sent, not checked against the payload
    pub fn declared_len(&self) -> Option<u16> {
        match self.body().get(UBX_LENGTH_OFFSET..UBX_PAYLOAD_OFFSET) {
            Some(&[lo, hi]) => Some(u16::from_le_bytes([lo, hi])),
            _ => None,
        }
    }

    /// First payload byte, which MGA messages use as their type
    pub fn msg_type(&self) -> Option<u8> {
        self.body().get(UBX_PAYLOAD_OFFSET).copied()
    }

    pub fn payload(&self) -> &'a [u8] {
        self.body().get(UBX_PAYLOAD_OFFSET..).unwrap_or_default()
    }

    pub fn checksum(&self) -> (u8, u8) {
        let n = self.raw.len();
        (self.raw[n - 2], self.raw[n - 1])
    }

    /// Class, id, length and payload: the bytes the checksum covers
    pub fn body(&self) -> &'a [u8] {
        &self.raw[..self.raw.len() - UBX_CHECKSUM_LEN]
    }

    /// The candidate exactly as split from the stream, checksum included
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// Lowercase hex of the frame as it goes on the wire, sync chars included
    pub fn to_hex(&self) -> String {
        wire_hex(self.raw)
    }
}

impl fmt::Debug for MgaFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MgaFrame")
            .field("class", &self.class())
            .field("msg_id", &self.msg_id())
            .field("msg_type", &self.msg_type())
            .field("declared_len", &self.declared_len())
            .field("payload_len", &self.payload().len())
            .finish()
    }
}

/// Hex dump of a candidate with the sync marker put back in front
pub fn wire_hex(candidate: &[u8]) -> String {
    let mut s = hex::encode(UBX_SYNC_MARKER);
    s.push_str(&hex::encode(candidate));
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    // UBX-MGA-INI-TIME_UTC header with a 2 byte stub payload
    const RAW: [u8; 8] = [0x13, 0x40, 0x18, 0x00, 0x10, 0x00, 0xaa, 0xbb];

    #[test]
    fn test_frame_fields() {
        let frame = MgaFrame::new(&RAW);
        assert_eq!(frame.class(), 0x13);
        assert_eq!(frame.msg_id(), Some(0x40));
        assert_eq!(frame.declared_len(), Some(24));
        assert_eq!(frame.msg_type(), Some(0x10));
        assert_eq!(frame.payload(), &[0x10, 0x00]);
        assert_eq!(frame.checksum(), (0xaa, 0xbb));
        assert_eq!(frame.body(), &RAW[..6]);
        assert_eq!(frame.as_bytes(), &RAW);
    }

    #[test]
    fn test_short_frame_has_no_header_fields() {
        let raw = [0x13, 0x13, 0x13];
        let frame = MgaFrame::new(&raw);
        assert_eq!(frame.class(), 0x13);
        assert_eq!(frame.msg_id(), None);
        assert_eq!(frame.declared_len(), None);
        assert_eq!(frame.msg_type(), None);
        assert!(frame.payload().is_empty());
    }

    #[test]
    fn test_wire_hex() {
        assert_eq!(wire_hex(&[0x13, 0x00, 0xff]), "b5621300ff");
        assert_eq!(MgaFrame::new(&RAW).to_hex(), "b562134018001000aabb");
    }
}
