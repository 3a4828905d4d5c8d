use std::time::Duration;

pub const UBX_SYNC_CHAR_1: u8 = 0xb5;
pub const UBX_SYNC_CHAR_2: u8 = 0x62;
/// Two-byte marker that opens every UBX frame
pub const UBX_SYNC_MARKER: [u8; 2] = [UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2];
pub(crate) const UBX_SYNC_SIZE: usize = 2;
pub const UBX_CHECKSUM_LEN: usize = 2;

// Offsets below are relative to a frame body, i.e. after the sync marker
pub(crate) const UBX_CLASS_OFFSET: usize = 0;
pub(crate) const UBX_MSG_ID_OFFSET: usize = 1;
pub(crate) const UBX_LENGTH_OFFSET: usize = 2; // After MSG_ID
pub(crate) const UBX_PAYLOAD_OFFSET: usize = 4; // After the 2 length bytes

/// UBX-MGA, Multiple GNSS Assistance
pub const UBX_CLASS_MGA: u8 = 0x13;

/// Default pause between two forwarded assistance messages
pub const DEFAULT_INTER_MESSAGE_DELAY: Duration = Duration::from_millis(100);

/// Prefix of the significant lines of a u-center configuration export
pub const CFG_DIRECTIVE_PREFIX: &str = "CFG-";
/// Directives with this prefix reset the receiver
pub const CFG_RESET_DIRECTIVE_PREFIX: &str = "CFG-RST";
/// Separates the directive name from its hex payload
pub const CFG_PAYLOAD_SEPARATOR: &str = " - ";
/// Time the receiver needs to come back after a CFG-RST
pub const CFG_RESET_SETTLE_DELAY: Duration = Duration::from_secs(5);

pub const ASSISTNOW_PRIMARY_URL: &str =
    "https://online-live1.services.u-blox.com/GetOnlineData.ashx";
pub const ASSISTNOW_SECONDARY_URL: &str =
    "https://online-live2.services.u-blox.com/GetOnlineData.ashx";
