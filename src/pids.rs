//! RDM parameter IDs (PIDs) referenced by the responders in this crate.
//!
//! Values are taken from ANSI E1.20 (category 0x00xx/0x10xx) and the
//! E1.37-1 / E1.37-2 extensions (category 0x03xx / 0x04xx).

// Network management (discovery) — routed by the dispatcher's command-class
// filter, never by a PARAM_HANDLERS entry.
pub const DISC_UNIQUE_BRANCH: u16 = 0x0001;
pub const DISC_MUTE: u16 = 0x0002;
pub const DISC_UN_MUTE: u16 = 0x0003;

// Always-present PIDs (never listed by SUPPORTED_PARAMETERS, always in the
// handler table).
pub const QUEUED_MESSAGE: u16 = 0x0020;
pub const SUPPORTED_PARAMETERS: u16 = 0x0050;
pub const STATUS_MESSAGES: u16 = 0x0030;

// Status collection.
pub const STATUS_ID_DESCRIPTION: u16 = 0x0032;
pub const CLEAR_STATUS_ID: u16 = 0x0033;
pub const SUB_DEVICE_STATUS_REPORT_THRESHOLD: u16 = 0x0034;

// Product information.
pub const PARAMETER_DESCRIPTION: u16 = 0x0051;
pub const DEVICE_INFO: u16 = 0x0060;
pub const PRODUCT_DETAIL_ID_LIST: u16 = 0x0070;
pub const DEVICE_MODEL_DESCRIPTION: u16 = 0x0080;
pub const MANUFACTURER_LABEL: u16 = 0x0081;
pub const DEVICE_LABEL: u16 = 0x0082;
pub const FACTORY_DEFAULTS: u16 = 0x0090;
pub const LANGUAGE_CAPABILITIES: u16 = 0x00A0;
pub const LANGUAGE: u16 = 0x00B0;
pub const SOFTWARE_VERSION_LABEL: u16 = 0x00C0;
pub const BOOT_SOFTWARE_VERSION_ID: u16 = 0x00C1;
pub const BOOT_SOFTWARE_VERSION_LABEL: u16 = 0x00C2;

// DMX512 setup.
pub const DMX_PERSONALITY: u16 = 0x00E0;
pub const DMX_PERSONALITY_DESCRIPTION: u16 = 0x00E1;
pub const DMX_START_ADDRESS: u16 = 0x00F0;
pub const SLOT_INFO: u16 = 0x0120;
pub const SLOT_DESCRIPTION: u16 = 0x0121;
pub const DEFAULT_SLOT_VALUE: u16 = 0x0122;

// Sensors.
pub const SENSOR_DEFINITION: u16 = 0x0200;
pub const SENSOR_VALUE: u16 = 0x0201;
pub const RECORD_SENSORS: u16 = 0x0202;

// Power/lamp settings.
pub const DEVICE_HOURS: u16 = 0x0400;
pub const LAMP_HOURS: u16 = 0x0401;
pub const LAMP_STRIKES: u16 = 0x0402;
pub const LAMP_STATE: u16 = 0x0403;
pub const LAMP_ON_MODE: u16 = 0x0404;
pub const DEVICE_POWER_CYCLES: u16 = 0x0405;

// Display settings.
pub const DISPLAY_INVERT: u16 = 0x0500;
pub const DISPLAY_LEVEL: u16 = 0x0501;

// Configuration.
pub const PAN_INVERT: u16 = 0x0600;
pub const TILT_INVERT: u16 = 0x0601;
pub const PAN_TILT_SWAP: u16 = 0x0602;
pub const REAL_TIME_CLOCK: u16 = 0x0603;

// Control.
pub const IDENTIFY_DEVICE: u16 = 0x1000;
pub const RESET_DEVICE: u16 = 0x1001;
pub const POWER_STATE: u16 = 0x1010;

// E1.37-1 dimmer PIDs.
pub const DIMMER_INFO: u16 = 0x0340;
pub const MINIMUM_LEVEL: u16 = 0x0341;
pub const MAXIMUM_LEVEL: u16 = 0x0342;
pub const CURVE: u16 = 0x0343;
pub const CURVE_DESCRIPTION: u16 = 0x0344;
pub const OUTPUT_RESPONSE_TIME: u16 = 0x0345;
pub const OUTPUT_RESPONSE_TIME_DESCRIPTION: u16 = 0x0346;
pub const MODULATION_FREQUENCY: u16 = 0x0347;
pub const MODULATION_FREQUENCY_DESCRIPTION: u16 = 0x0348;
pub const PRESET_INFO: u16 = 0x0360;
pub const PRESET_STATUS: u16 = 0x0361;
pub const PRESET_MERGEMODE: u16 = 0x0362;
pub const POWER_ON_SELF_TEST: u16 = 0x0363;
pub const CAPTURE_PRESET: u16 = 0x0367;
pub const PRESET_PLAYBACK: u16 = 0x0368;
pub const FAIL_MODE: u16 = 0x0041;
pub const STARTUP_MODE: u16 = 0x0042;
pub const BURN_IN: u16 = 0x0440;

// E1.37-2 network PIDs.
pub const LIST_INTERFACES: u16 = 0x00F5;
pub const INTERFACE_LABEL: u16 = 0x00F6;
pub const INTERFACE_HARDWARE_ADDRESS_TYPE1: u16 = 0x00F7;
pub const IPV4_CURRENT_ADDRESS: u16 = 0x00F8;
pub const IPV4_DEFAULT_ROUTE: u16 = 0x00F9;
pub const DNS_HOSTNAME: u16 = 0x00FA;
pub const DNS_DOMAIN_NAME: u16 = 0x00FB;
pub const DNS_NAME_SERVER: u16 = 0x00FC;

// Manufacturer-specific.
pub const OLA_MANUFACTURER_PID_CODE_VERSION: u16 = 0x8001;
