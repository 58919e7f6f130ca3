pub const DMX_NULL_START: u8 = 0x00;
/// start code + 512 byte package
pub const DMX_MAX_PACKAGE_SIZE: usize = 513;
pub const SC_RDM: u8 = 0xCC;
pub const SC_SUB_MESSAGE: u8 = 0x01;

pub const PREAMBLE_BYTE: u8 = 0xFE;
pub const SEPARATOR_BYTE: u8 = 0xAA;

pub const BROADCAST_UID: u64 = 0xFFFF_FFFFFFFF;

pub const DMX_BAUD: u32 = 250_000;

pub const BREAK_MICROS: u64 = 200;
pub const MAB_MICROS: u64 = 48;
pub const MAXIMUM_DMX512_MILLIS: usize = 1250;
pub const INTER_SLOT_TIME_MILLIS: usize = 2;

pub const RDM_MIN_PACKAGE_SIZE: usize = 22;
pub const RDM_MAX_PACKAGE_SIZE: usize = 257;
/// Excluding preamble and separator
pub const RDM_DISCOVERY_RESPONSE_SIZE: usize = 16;
/// Including 7 bytes preamble + 1 byte separator
pub const RDM_MAX_DISCOVERY_RESPONSE_SIZE: usize = RDM_DISCOVERY_RESPONSE_SIZE + 8;

pub const RDM_MAX_PARAMETER_DATA_LENGTH: usize = 231;
pub const RDM_MAX_STATUS_PACKAGES_PER_REQUEST: usize = 25;
pub const RDM_STATUS_MESSAGE_SIZE: usize = 9;
pub const RDM_DEVICE_INFO_SIZE: usize = 0x13;

pub const RDM_MAX_SUPPORTED_PARAMETERS_PER_REQUEST: usize = 128;

/// DMX512 universe size in slots.
pub const DMX_UNIVERSE_SIZE: u16 = 512;
/// Maximum length of any fixed-max RDM string field (device label, description, ...).
pub const MAX_RDM_STRING_LENGTH: usize = 32;
/// Ceiling reported in the `message_count` field regardless of actual queue depth.
pub const MAX_QUEUED_MESSAGE_COUNT: u8 = 255;
/// Default delay advertised by [`crate::ack_timer::AckQueue`] responders, in milliseconds.
pub const ACK_TIMER_MS: u64 = 400;

/// Sub-device addressing the root device.
pub const ROOT_RDM_DEVICE: u16 = 0x0000;
/// Sub-device addressing "all sub-devices".
pub const SUB_DEVICE_ALL_CALL: u16 = 0xFFFF;
/// DMX start address sentinel for a zero-footprint device.
pub const ZERO_FOOTPRINT_DMX_ADDRESS: u16 = 0xFFFF;

/// Maximum number of sub-devices a root device may hold.
pub const MAX_SUBDEVICE_NUMBER: u16 = 512;
