use crate::constants::{UBX_CHECKSUM_LEN, UBX_SYNC_MARKER, UBX_SYNC_SIZE};

/// UBX [Fletcher-16 checksum](https://en.wikipedia.org/wiki/Fletcher%27s_checksum) calculator supporting both streaming and single-shot use
///
/// The checksum covers class, message ID, the little endian length and the payload.
/// Neither the sync chars nor the checksum itself take part in it.
#[derive(Default, Debug, Clone, Copy)]
pub struct UbxChecksumCalc {
    ck_a: u8,
    ck_b: u8,
}

impl UbxChecksumCalc {
    pub const fn new() -> Self {
        Self { ck_a: 0, ck_b: 0 }
    }

    /// Update checksum with new bytes
    pub const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    /// Update checksum with a single byte
    pub const fn update_byte(&mut self, byte: u8) {
        self.ck_a = self.ck_a.wrapping_add(byte);
        self.ck_b = self.ck_b.wrapping_add(self.ck_a);
    }

    /// Get the current checksum result
    pub const fn result(self) -> (u8, u8) {
        (self.ck_a, self.ck_b)
    }

    pub const fn is_valid(&self, received_ck_a: u8, received_ck_b: u8) -> bool {
        self.ck_a == received_ck_a && self.ck_b == received_ck_b
    }
}

/// Single-shot checksum over a frame body without its trailer
pub const fn ubx_checksum(bytes: &[u8]) -> (u8, u8) {
    let mut calc = UbxChecksumCalc::new();
    calc.update(bytes);
    calc.result()
}

/// Wraps an already formed body (class, id, length, payload) into a
/// transmittable frame: sync chars in front, checksum behind.
pub fn frame_message(body: &[u8]) -> Vec<u8> {
    let (ck_a, ck_b) = ubx_checksum(body);
    let mut frame = Vec::with_capacity(UBX_SYNC_SIZE + body.len() + UBX_CHECKSUM_LEN);
    frame.extend_from_slice(&UBX_SYNC_MARKER);
    frame.extend_from_slice(body);
    frame.push(ck_a);
    frame.push(ck_b);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2};

    const PACK_LEN: u8 = 2;
    const VALID_CK_A: u8 = 0x11;
    const VALID_CK_B: u8 = 0x38;
    // UBX-ACK-ACK packet: Class=0x05, ID=0x01, Length=0x0002, Payload=[0x04, 0x05], Checksum=[0x11, 0x38]
    const VALID_UBX_PACKET: [u8; 10] = [
        UBX_SYNC_CHAR_1,
        UBX_SYNC_CHAR_2, // Sync chars (not included in checksum)
        0x05,
        0x01, // Class and Message ID
        PACK_LEN,
        0x00, // Length (2 bytes)
        0x04,
        0x05, // Payload
        VALID_CK_A,
        VALID_CK_B, // Checksum
    ];

    #[test]
    fn test_empty_input_checksum() {
        assert_eq!(ubx_checksum(&[]), (0, 0));
    }

    #[test]
    fn test_streaming_checksum_valid() {
        let mut calc = UbxChecksumCalc::new();
        calc.update(&VALID_UBX_PACKET[2..8]);
        assert!(calc.is_valid(VALID_CK_A, VALID_CK_B));
        assert_eq!(calc.result(), (VALID_CK_A, VALID_CK_B));
    }

    #[test]
    fn test_streaming_checksum_invalid() {
        let mut packet = VALID_UBX_PACKET;
        packet[7] = packet[7].wrapping_add(1);
        let mut calc = UbxChecksumCalc::new();
        calc.update(&packet[2..8]);
        assert!(!calc.is_valid(VALID_CK_A, VALID_CK_B));
    }

    #[test]
    fn test_streaming_checksum_incremental() {
        let mut calc = UbxChecksumCalc::new();
        for byte in &VALID_UBX_PACKET[2..8] {
            calc.update_byte(*byte);
        }
        assert_eq!(calc.result(), ubx_checksum(&VALID_UBX_PACKET[2..8]));
    }

    #[test]
    fn test_streaming_checksum_chunks() {
        let mut calc = UbxChecksumCalc::new();
        calc.update(&VALID_UBX_PACKET[2..4]); // Class and ID
        calc.update(&VALID_UBX_PACKET[4..6]); // Length
        calc.update(&VALID_UBX_PACKET[6..8]); // Payload
        assert_eq!(calc.result(), (VALID_CK_A, VALID_CK_B));
    }

    #[test]
    fn test_running_sums_wrap() {
        // 0xff * 3: ck_a goes ff, fe, fd and ck_b ff, fd, fa
        assert_eq!(ubx_checksum(&[0xff, 0xff, 0xff]), (0xfd, 0xfa));
    }

    #[test]
    fn test_frame_message_matches_known_packet() {
        assert_eq!(frame_message(&VALID_UBX_PACKET[2..8]), VALID_UBX_PACKET);
    }

    #[test]
    fn test_frame_message_cfg_rst() {
        let body = [0x06, 0x04, 0x00, 0x00, 0xff, 0xff, 0x02];
        let (ck_a, ck_b) = ubx_checksum(&body);
        assert_eq!((ck_a, ck_b), (0x0a, 0x3f));
        assert_eq!(
            frame_message(&body),
            [0xb5, 0x62, 0x06, 0x04, 0x00, 0x00, 0xff, 0xff, 0x02, 0x0a, 0x3f]
        );
    }

    // Compute checksum at compile time
    #[allow(dead_code, reason = "constant time evaluated")]
    const fn is_checksum_valid(bytes: &[u8], expected_ck_a: u8, expected_ck_b: u8) -> bool {
        let mut calc = UbxChecksumCalc::new();
        calc.update(bytes);
        calc.is_valid(expected_ck_a, expected_ck_b)
    }

    #[test]
    fn test_const_checksum_computation() {
        // Compile-time assertion
        const _: () = {
            assert!(is_checksum_valid(
                &[
                    0x05, 0x01, // Class and Message ID
                    PACK_LEN, 0x00, // Length (2 bytes)
                    0x04, 0x05, // Payload
                ],
                VALID_CK_A,
                VALID_CK_B
            ));
        };
    }
}
