//! A dimmer supporting the E1.37-1 PID surface: curve/response-time/PWM
//! frequency settings, minimum/maximum level, presets, and fail/startup
//! scenes. A single personality (one 6-channel, 16-bit-resolution mode).

use crate::layouts::capture_preset_layout;
use crate::personality::{Personality, PersonalityCollection, PersonalityManager};
use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::responder_helper as helper;
use crate::responder_helper::{DeviceInfoFields, FailOrStartupMode, PresetInfo, PresetStatus};
use crate::responder_ops::{DispatchOutcome, MessageCounted, ParamHandler, ResponderOps};
use crate::responders::{software_version_label, MANUFACTURER_LABEL, PRODUCT_CATEGORY_DIMMER, PRODUCT_DETAIL_TEST};
use crate::settings::{Setting, SettingCollection, SettingManager};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

const DEVICE_MODEL_ID: u16 = 0x0004;
const DIMMER_RESOLUTION: u8 = 14;
const LOWER_MIN_LEVEL: u16 = 0x0000;
const UPPER_MIN_LEVEL: u16 = 0x7fff;
const LOWER_MAX_LEVEL: u16 = 0x7fff;
const UPPER_MAX_LEVEL: u16 = 0xffff;
const PRESET_COUNT: usize = 6;
const READ_ONLY_SCENE: u16 = 1;

const PRESET_NOT_PROGRAMMED: u8 = 0;
const PRESET_PROGRAMMED: u8 = 1;
const PRESET_PROGRAMMED_READ_ONLY: u8 = 2;
const MERGEMODE_DMX_ONLY: u8 = 3;

static PERSONALITIES: [Personality; 1] = [Personality::new(12, "6-Channel 16-bit")];
static PERSONALITY_COLLECTION: PersonalityCollection = PersonalityCollection::new(&PERSONALITIES);

static CURVES: [Setting; 3] = [
    Setting::new("Linear Curve"),
    Setting::new("Square Law Curve"),
    Setting::new("S Curve"),
];
static CURVE_SETTINGS: SettingCollection = SettingCollection::new(&CURVES, false);

static RESPONSE_TIMES: [Setting; 4] = [
    Setting::new("Super fast"),
    Setting::new("Fast"),
    Setting::new("Slow"),
    Setting::new("Very slow"),
];
static RESPONSE_TIME_SETTINGS: SettingCollection = SettingCollection::new(&RESPONSE_TIMES, false);

static PWM_FREQUENCIES: [Setting; 5] = [
    Setting::with_argument("120Hz", 120),
    Setting::with_argument("500Hz", 500),
    Setting::with_argument("1kHz", 1000),
    Setting::with_argument("5kHz", 5000),
    Setting::with_argument("10kHz", 10000),
];
static FREQUENCY_SETTINGS: SettingCollection = SettingCollection::new(&PWM_FREQUENCIES, false);

static HANDLERS: [ParamHandler<AdvancedDimmerResponder>; 28] = [
    ParamHandler::get_only(pids::DEVICE_INFO, get_device_info),
    ParamHandler::get_only(pids::PRODUCT_DETAIL_ID_LIST, get_product_detail_list),
    ParamHandler::get_only(pids::DEVICE_MODEL_DESCRIPTION, get_device_model_description),
    ParamHandler::get_only(pids::MANUFACTURER_LABEL, get_manufacturer_label),
    ParamHandler::get_only(pids::DEVICE_LABEL, get_device_label),
    ParamHandler::get_only(pids::SOFTWARE_VERSION_LABEL, get_software_version_label),
    ParamHandler::get_set(pids::DMX_PERSONALITY, get_personality, set_personality),
    ParamHandler::get_only(pids::DMX_PERSONALITY_DESCRIPTION, get_personality_description),
    ParamHandler::get_set(pids::DMX_START_ADDRESS, get_dmx_start_address, set_dmx_start_address),
    ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify),
    ParamHandler::set_only(pids::CAPTURE_PRESET, set_capture_preset),
    ParamHandler::get_set(pids::PRESET_PLAYBACK, get_preset_playback, set_preset_playback),
    ParamHandler::get_only(pids::DIMMER_INFO, get_dimmer_info),
    ParamHandler::get_set(pids::MINIMUM_LEVEL, get_minimum_level, set_minimum_level),
    ParamHandler::get_set(pids::MAXIMUM_LEVEL, get_maximum_level, set_maximum_level),
    ParamHandler::get_set(pids::FAIL_MODE, get_fail_mode, set_fail_mode),
    ParamHandler::get_set(pids::STARTUP_MODE, get_startup_mode, set_startup_mode),
    ParamHandler::get_set(pids::BURN_IN, get_burn_in, set_burn_in),
    ParamHandler::get_set(pids::CURVE, get_curve, set_curve),
    ParamHandler::get_only(pids::CURVE_DESCRIPTION, get_curve_description),
    ParamHandler::get_set(pids::OUTPUT_RESPONSE_TIME, get_response_time, set_response_time),
    ParamHandler::get_only(pids::OUTPUT_RESPONSE_TIME_DESCRIPTION, get_response_time_description),
    ParamHandler::get_set(pids::MODULATION_FREQUENCY, get_pwm_frequency, set_pwm_frequency),
    ParamHandler::get_only(pids::MODULATION_FREQUENCY_DESCRIPTION, get_pwm_frequency_description),
    ParamHandler::get_set(pids::POWER_ON_SELF_TEST, get_power_on_self_test, set_power_on_self_test),
    ParamHandler::get_set(pids::PRESET_STATUS, get_preset_status, set_preset_status),
    ParamHandler::get_set(pids::PRESET_MERGEMODE, get_preset_merge_mode, set_preset_merge_mode),
    ParamHandler::get_only(pids::PRESET_INFO, get_preset_info),
];

static OPS: ResponderOps<AdvancedDimmerResponder> = ResponderOps::new(&HANDLERS);

pub struct AdvancedDimmerResponderConfig {
    pub uid: UniqueIdentifier,
}

#[derive(Clone, Copy)]
struct Preset {
    fade_up_time: u16,
    fade_down_time: u16,
    wait_time: u16,
    programmed: u8,
}

impl Preset {
    const fn new() -> Self {
        Self {
            fade_up_time: 0,
            fade_down_time: 0,
            wait_time: 0,
            programmed: PRESET_NOT_PROGRAMMED,
        }
    }
}

pub struct AdvancedDimmerResponder {
    uid: UniqueIdentifier,
    identify_state: bool,
    start_address: u16,
    maximum_level: u16,
    min_level_increasing: u16,
    min_level_decreasing: u16,
    on_below_min: bool,
    personality_manager: PersonalityManager,
    curve_settings: SettingManager,
    response_time_settings: SettingManager,
    frequency_settings: SettingManager,
    presets: [Preset; PRESET_COUNT],
    preset_scene: u16,
    preset_level: u8,
    preset_merge_mode: u8,
    fail_mode: FailOrStartupMode,
    startup_mode: FailOrStartupMode,
    burn_in: u8,
    power_on_self_test: bool,
}

impl MessageCounted for AdvancedDimmerResponder {
    fn message_count(&self) -> u8 {
        0
    }
}

impl AdvancedDimmerResponder {
    pub fn new(config: AdvancedDimmerResponderConfig) -> Self {
        let mut presets = [Preset::new(); PRESET_COUNT];
        presets[READ_ONLY_SCENE as usize - 1].programmed = PRESET_PROGRAMMED_READ_ONLY;

        Self {
            uid: config.uid,
            identify_state: false,
            start_address: 1,
            maximum_level: UPPER_MAX_LEVEL,
            min_level_increasing: 10,
            min_level_decreasing: 20,
            on_below_min: true,
            personality_manager: PersonalityManager::new(&PERSONALITY_COLLECTION, 1),
            curve_settings: SettingManager::new(&CURVE_SETTINGS, 0),
            response_time_settings: SettingManager::new(&RESPONSE_TIME_SETTINGS, 0),
            frequency_settings: SettingManager::new(&FREQUENCY_SETTINGS, 0),
            presets,
            preset_scene: 0,
            preset_level: 0,
            preset_merge_mode: 0,
            fail_mode: FailOrStartupMode { scene: 0, delay: 0, hold_time: 0, level: 0 },
            startup_mode: FailOrStartupMode { scene: 0, delay: 0, hold_time: 0, level: 0 },
            burn_in: 0,
            power_on_self_test: true,
        }
    }

    pub fn send_rdm_request(&mut self, request: &RdmRequest) -> DispatchOutcome {
        OPS.handle_rdm_request(self, self.uid, 0, request)
    }

    fn footprint(&self) -> u16 {
        self.personality_manager.active_footprint()
    }
}

fn nack(request: &RdmRequest, reason: NackReason, message_count: u8) -> RdmResponse {
    request
        .nack_response(reason, message_count)
        .expect("dispatcher guarantees a unicast destination before invoking handlers")
}

fn ack(request: &RdmRequest, data: DataPack, message_count: u8) -> RdmResponse {
    request
        .ack_response(data, message_count)
        .expect("dispatcher guarantees a unicast destination before invoking handlers")
}

fn get_device_info(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let fields = DeviceInfoFields {
        device_model_id: DEVICE_MODEL_ID,
        product_category: PRODUCT_CATEGORY_DIMMER,
        software_version: 1,
        sub_device_count: 0,
        sensor_count: 0,
    };

    helper::get_device_info(
        request,
        &fields,
        &target.personality_manager,
        target.start_address,
        target.message_count(),
    )
}

fn get_product_detail_list(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_product_detail_list(request, &[PRODUCT_DETAIL_TEST], target.message_count())
}

fn get_device_model_description(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "OLA E1.37-1 Dimmer", target.message_count())
}

fn get_manufacturer_label(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, MANUFACTURER_LABEL, target.message_count())
}

fn get_device_label(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "Dummy Dimmer", target.message_count())
}

fn get_software_version_label(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, software_version_label().as_str(), target.message_count())
}

fn get_personality(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_personality(request, &target.personality_manager, target.message_count())
}

fn set_personality(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let start_address = target.start_address;
    helper::set_personality(request, &mut target.personality_manager, start_address, message_count)
}

fn get_personality_description(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_personality_description(request, &target.personality_manager, target.message_count())
}

fn get_dmx_start_address(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_dmx_address(request, target.footprint(), target.start_address, target.message_count())
}

fn set_dmx_start_address(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let footprint = target.footprint();
    match helper::set_dmx_address(request, footprint, message_count) {
        Ok(address) => {
            target.start_address = address;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_identify(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_bool_value(request, target.identify_state, target.message_count())
}

fn set_identify(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(state) => {
            target.identify_state = state;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn set_capture_preset(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    if request.param_data.len() != 8 {
        return nack(request, NackReason::FormatError, message_count);
    }

    let view = capture_preset_layout::View::new(&request.param_data[..]);
    let scene = view.scene().read();

    if scene == 0 || scene as usize >= target.presets.len() {
        return nack(request, NackReason::DataOutOfRange, message_count);
    }

    let preset = &mut target.presets[scene as usize - 1];
    if preset.programmed == PRESET_PROGRAMMED_READ_ONLY {
        return nack(request, NackReason::WriteProtect, message_count);
    }

    preset.fade_up_time = view.fade_up_time().read();
    preset.fade_down_time = view.fade_down_time().read();
    preset.wait_time = view.wait_time().read();
    preset.programmed = PRESET_PROGRAMMED;
    helper::empty_set_response(request, message_count)
}

fn get_preset_playback(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_preset_playback(request, target.preset_scene, target.preset_level, target.message_count())
}

fn set_preset_playback(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_preset_playback(request, message_count) {
        Ok(args) => {
            if args.mode as usize >= target.presets.len() && args.mode != 0xffff {
                return nack(request, NackReason::DataOutOfRange, message_count);
            }

            target.preset_scene = args.mode;
            target.preset_level = args.level;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_dimmer_info(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_dimmer_info(
        request,
        0,
        0,
        LOWER_MAX_LEVEL,
        UPPER_MAX_LEVEL,
        CURVE_SETTINGS.count(),
        DIMMER_RESOLUTION,
        1,
        target.message_count(),
    )
}

fn get_minimum_level(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_minimum_level(
        request,
        target.min_level_increasing,
        target.min_level_decreasing,
        target.on_below_min,
        target.message_count(),
    )
}

fn set_minimum_level(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_minimum_level(request, message_count) {
        Ok(args) => {
            let in_range = |value: u16| (LOWER_MIN_LEVEL..=UPPER_MIN_LEVEL).contains(&value);
            if !in_range(args.increasing) || !in_range(args.decreasing) {
                return nack(request, NackReason::DataOutOfRange, message_count);
            }

            target.min_level_increasing = args.increasing;
            target.min_level_decreasing = args.decreasing;
            target.on_below_min = args.on_below_min;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_maximum_level(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_uint16(request, target.maximum_level, target.message_count())
}

fn set_maximum_level(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_uint16(request, message_count) {
        Ok(level) => {
            if !(LOWER_MAX_LEVEL..=UPPER_MAX_LEVEL).contains(&level) {
                return nack(request, NackReason::DataOutOfRange, message_count);
            }

            target.maximum_level = level;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_fail_mode(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_fail_or_startup_mode(request, &target.fail_mode, target.message_count())
}

fn set_fail_mode(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_fail_or_startup_mode(request, message_count) {
        Ok(mode) => {
            if mode.scene as usize >= target.presets.len() {
                return nack(request, NackReason::DataOutOfRange, message_count);
            }

            target.fail_mode = mode;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_startup_mode(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_fail_or_startup_mode(request, &target.startup_mode, target.message_count())
}

fn set_startup_mode(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_fail_or_startup_mode(request, message_count) {
        Ok(mode) => {
            if mode.scene as usize >= target.presets.len() {
                return nack(request, NackReason::DataOutOfRange, message_count);
            }

            target.startup_mode = mode;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_burn_in(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_uint8(request, target.burn_in, target.message_count())
}

/// The clock starts immediately, so the hours remaining is one less than
/// what was requested.
fn set_burn_in(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_uint8(request, message_count) {
        Ok(hours) => {
            target.burn_in = hours.saturating_sub(1);
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn setting_description_response(
    request: &RdmRequest,
    manager: &SettingManager,
    with_argument: bool,
    message_count: u8,
) -> RdmResponse {
    let Some(index) = helper::extract_uint8(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    let Some(description) = manager.description(index) else {
        return nack(request, NackReason::DataOutOfRange, message_count);
    };

    let mut data = DataPack::new();
    data.push(index).unwrap();
    if with_argument {
        let argument = manager.argument(index).unwrap_or(0);
        data.extend_from_slice(&argument.to_be_bytes()).unwrap();
    }
    data.extend_from_slice(description.as_bytes()).unwrap();

    ack(request, data, message_count)
}

fn setting_set(request: &RdmRequest, manager: &mut SettingManager, message_count: u8) -> RdmResponse {
    let Some(index) = helper::extract_uint8(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    match manager.set(index) {
        Ok(()) => helper::empty_set_response(request, message_count),
        Err(_) => nack(request, NackReason::DataOutOfRange, message_count),
    }
}

fn get_curve(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    ack(request, target.curve_settings.get_value(), target.message_count())
}

fn set_curve(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    setting_set(request, &mut target.curve_settings, message_count)
}

fn get_curve_description(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    setting_description_response(request, &target.curve_settings, false, message_count)
}

fn get_response_time(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    ack(request, target.response_time_settings.get_value(), target.message_count())
}

fn set_response_time(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    setting_set(request, &mut target.response_time_settings, message_count)
}

fn get_response_time_description(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    setting_description_response(request, &target.response_time_settings, false, message_count)
}

fn get_pwm_frequency(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    ack(request, target.frequency_settings.get_value(), target.message_count())
}

fn set_pwm_frequency(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    setting_set(request, &mut target.frequency_settings, message_count)
}

fn get_pwm_frequency_description(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    setting_description_response(request, &target.frequency_settings, true, message_count)
}

fn get_power_on_self_test(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_bool_value(request, target.power_on_self_test, target.message_count())
}

fn set_power_on_self_test(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(value) => {
            target.power_on_self_test = value;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_preset_status(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let Some(scene) = helper::extract_uint16(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    if scene == 0 || scene as usize >= target.presets.len() {
        return nack(request, NackReason::DataOutOfRange, message_count);
    }

    let preset = &target.presets[scene as usize - 1];
    let status = PresetStatus {
        scene,
        fade_up_time: preset.fade_up_time,
        fade_down_time: preset.fade_down_time,
        wait_time: preset.wait_time,
        programmed: preset.programmed,
    };

    helper::get_preset_status(request, &status, message_count)
}

fn set_preset_status(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_preset_status(request, target.presets.len() as u16, READ_ONLY_SCENE, message_count) {
        Ok(args) => {
            if args.programmed > 1 {
                return nack(request, NackReason::DataOutOfRange, message_count);
            }

            let preset = &mut target.presets[args.scene as usize - 1];
            if args.programmed == 1 {
                preset.fade_up_time = 0;
                preset.fade_down_time = 0;
                preset.wait_time = 0;
                preset.programmed = PRESET_NOT_PROGRAMMED;
            } else {
                preset.fade_up_time = args.fade_up_time;
                preset.fade_down_time = args.fade_down_time;
                preset.wait_time = args.wait_time;
                preset.programmed = PRESET_PROGRAMMED;
            }

            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_preset_merge_mode(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_uint8(request, target.preset_merge_mode, target.message_count())
}

fn set_preset_merge_mode(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_uint8(request, message_count) {
        Ok(mode) => {
            if mode > MERGEMODE_DMX_ONLY {
                return nack(request, NackReason::DataOutOfRange, message_count);
            }

            target.preset_merge_mode = mode;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_preset_info(target: &mut AdvancedDimmerResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    let info = PresetInfo {
        level_field_supported: true,
        preset_sequence_supported: true,
        split_times_supported: true,
        dmx_fail_infinite_delay_supported: true,
        dmx_fail_infinite_hold_supported: true,
        startup_infinite_hold_supported: true,
        max_scene_number: target.presets.len() as u16,
        min_preset_fade_time: 0,
        max_preset_fade_time: 0xfffe,
        min_preset_wait_time: 0,
        max_preset_wait_time: 0xfffe,
        min_fail_delay_time: 0,
        max_fail_delay_time: 0xfffe,
        min_fail_hold_time: 0,
        max_fail_hold_time: 0xfffe,
        min_startup_delay_time: 0,
        max_startup_delay_time: 0xfffe,
        min_startup_hold_time: 0,
        max_startup_hold_time: 0xfffe,
    };

    helper::get_preset_info(request, &info, target.message_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::types::ResponseType;
    use crate::unique_identifier::PackageAddress;

    fn responder() -> AdvancedDimmerResponder {
        AdvancedDimmerResponder::new(AdvancedDimmerResponderConfig {
            uid: UniqueIdentifier::new(0x7a70, 1).unwrap(),
        })
    }

    fn request(command_class: RequestCommandClass, param_id: u16, param_data: &[u8]) -> RdmRequest {
        RdmRequest {
            source_uid: UniqueIdentifier::new(0x7a70, 9).unwrap(),
            destination_uid: PackageAddress::Device(UniqueIdentifier::new(0x7a70, 1).unwrap()),
            transaction_number: 1,
            port_id: 1,
            sub_device: 0,
            command_class,
            param_id,
            param_data: DataPack::from_slice(param_data).unwrap(),
        }
    }

    #[test]
    fn preset_one_is_read_only_from_construction() {
        let mut responder = responder();
        let mut data = [0u8; 8];
        let mut view = capture_preset_layout::View::new(&mut data);
        view.scene_mut().write(1);
        let req = request(RequestCommandClass::SetCommand, pids::CAPTURE_PRESET, &data);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.response_type, ResponseType::ResponseTypeNackReason);
                assert_eq!(&response.param_data[..], &(NackReason::WriteProtect as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }

    #[test]
    fn capture_preset_programs_a_writable_scene() {
        let mut responder = responder();
        let mut data = [0u8; 8];
        let mut view = capture_preset_layout::View::new(&mut data);
        view.scene_mut().write(2);
        view.fade_up_time_mut().write(100);
        let req = request(RequestCommandClass::SetCommand, pids::CAPTURE_PRESET, &data);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => assert_eq!(response.response_type, ResponseType::ResponseTypeAck),
            _ => panic!("expected an ACK"),
        }
        assert_eq!(responder.presets[1].programmed, PRESET_PROGRAMMED);
        assert_eq!(responder.presets[1].fade_up_time, 100);
    }

    #[test]
    fn set_minimum_level_rejects_out_of_range() {
        let mut responder = responder();
        let mut data = [0u8; 5];
        let mut view = crate::layouts::minimum_level_layout::View::new(&mut data);
        view.min_level_increasing_mut().write(0x8000);
        let req = request(RequestCommandClass::SetCommand, pids::MINIMUM_LEVEL, &data);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::DataOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }

    #[test]
    fn set_maximum_level_accepts_lower_boundary() {
        let mut responder = responder();
        let req = request(
            RequestCommandClass::SetCommand,
            pids::MAXIMUM_LEVEL,
            &LOWER_MAX_LEVEL.to_be_bytes(),
        );

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => assert_eq!(response.response_type, ResponseType::ResponseTypeAck),
            _ => panic!("expected an ACK"),
        }
        assert_eq!(responder.maximum_level, LOWER_MAX_LEVEL);
    }

    #[test]
    fn get_curve_description_reports_index_and_name() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::CURVE_DESCRIPTION, &[1]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.param_data[0], 1);
                assert_eq!(&response.param_data[1..], b"Linear Curve");
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn get_pwm_frequency_description_includes_argument() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::MODULATION_FREQUENCY_DESCRIPTION, &[1]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.param_data[0], 1);
                assert_eq!(&response.param_data[1..5], &120u32.to_be_bytes());
                assert_eq!(&response.param_data[5..], b"120Hz");
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn set_preset_merge_mode_rejects_out_of_range() {
        let mut responder = responder();
        let req = request(RequestCommandClass::SetCommand, pids::PRESET_MERGEMODE, &[4]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::DataOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }
}
