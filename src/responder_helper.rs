//! Stateless routines producing bit-exact responses for PIDs implemented
//! the same way across most responders.
//!
//! Every function here assumes the caller (a responder's `Get*`/`Set*`
//! method, invoked from [`crate::responder_ops::ResponderOps`]) has already
//! confirmed the request targets this responder directly — broadcast
//! requests never reach these helpers, so `request.ack_response(...)` can't
//! fail and is unwrapped rather than threaded through as a `Result`.

use crate::consts::{DMX_UNIVERSE_SIZE, MAX_RDM_STRING_LENGTH, ZERO_FOOTPRINT_DMX_ADDRESS};
use crate::layouts::{
    dimmer_info_layout, fail_startup_mode_layout, minimum_level_layout,
    parameter_description_layout, personality_description_layout, preset_info_layout,
    preset_playback_layout, preset_status_layout, rdm_device_info_layout, real_time_clock_layout,
    sensor_value_layout,
};
use crate::personality::PersonalityManager;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::sensor::Sensor;
use crate::types::{DataPack, NackReason};

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

/// Zero-length ACK for operations whose effect is purely a side effect
/// (most SETs).
pub fn empty_set_response(request: &RdmRequest, message_count: u8) -> RdmResponse {
    ack(request, DataPack::new(), message_count)
}

/// Zero-length ACK for GETs with no meaningful payload (e.g. empty queues).
pub fn empty_get_response(request: &RdmRequest, message_count: u8) -> RdmResponse {
    ack(request, DataPack::new(), message_count)
}

pub fn extract_uint8(data: &[u8]) -> Option<u8> {
    if data.len() != 1 {
        return None;
    }
    Some(data[0])
}

pub fn extract_uint16(data: &[u8]) -> Option<u16> {
    Some(u16::from_be_bytes(data.try_into().ok()?))
}

pub fn extract_uint32(data: &[u8]) -> Option<u32> {
    Some(u32::from_be_bytes(data.try_into().ok()?))
}

/// Device model / category / software version / sensor and sub-device
/// counts the responder provides; footprint/personality/start-address are
/// either supplied directly or derived from a [`PersonalityManager`].
pub struct DeviceInfoFields {
    pub device_model_id: u16,
    pub product_category: u16,
    pub software_version: u32,
    pub sub_device_count: u16,
    pub sensor_count: u8,
}

/// `GetDeviceInfo` — raw footprint/personality/start-address variant, for
/// responders with no personality table (e.g. SensorResponder).
pub fn get_device_info_raw(
    request: &RdmRequest,
    fields: &DeviceInfoFields,
    dmx_footprint: u16,
    current_personality: u8,
    personality_count: u8,
    dmx_start_address: u16,
    message_count: u8,
) -> RdmResponse {
    let mut buffer = [0u8; crate::consts::RDM_DEVICE_INFO_SIZE];
    let mut view = rdm_device_info_layout::View::new(&mut buffer);

    view.protocol_version_mut().write(0x0100);
    view.device_model_id_mut().write(fields.device_model_id);
    view.product_category_mut().write(fields.product_category);
    view.software_version_id_mut().write(fields.software_version);
    view.dmx_footprint_mut().write(dmx_footprint);
    view.current_personality_mut().write(current_personality);
    view.personality_count_mut().write(personality_count);
    view.dmx_start_address_mut().write(if dmx_footprint == 0 {
        ZERO_FOOTPRINT_DMX_ADDRESS
    } else {
        dmx_start_address
    });
    view.sub_device_count_mut().write(fields.sub_device_count);
    view.sensor_count_mut().write(fields.sensor_count);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

/// `GetDeviceInfo` — derives footprint/personality/count from a
/// [`PersonalityManager`], per the table in §4.3.
pub fn get_device_info(
    request: &RdmRequest,
    fields: &DeviceInfoFields,
    personality_manager: &PersonalityManager,
    dmx_start_address: u16,
    message_count: u8,
) -> RdmResponse {
    get_device_info_raw(
        request,
        fields,
        personality_manager.active_footprint(),
        personality_manager.active_personality_number(),
        personality_manager.personality_count(),
        dmx_start_address,
        message_count,
    )
}

pub fn get_product_detail_list(
    request: &RdmRequest,
    codes: &[u16],
    message_count: u8,
) -> RdmResponse {
    let mut data = DataPack::new();
    for code in codes {
        data.extend_from_slice(&code.to_be_bytes()).unwrap();
    }
    ack(request, data, message_count)
}

/// `GetPersonality` — `(current_personality, personality_count)`.
pub fn get_personality(
    request: &RdmRequest,
    manager: &PersonalityManager,
    message_count: u8,
) -> RdmResponse {
    let data = [
        manager.active_personality_number(),
        manager.personality_count(),
    ];
    ack(request, DataPack::from_slice(&data).unwrap(), message_count)
}

/// `SetPersonality` — decodes a uint8 personality number and activates it.
pub fn set_personality(
    request: &RdmRequest,
    manager: &mut PersonalityManager,
    start_address: u16,
    message_count: u8,
) -> RdmResponse {
    let Some(personality_number) = extract_uint8(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    match manager.set_active_personality(personality_number, start_address) {
        Ok(()) => empty_set_response(request, message_count),
        Err(_) => nack(request, NackReason::DataOutOfRange, message_count),
    }
}

/// `GetPersonalityDescription` — `(personality, footprint, description)`.
pub fn get_personality_description(
    request: &RdmRequest,
    manager: &PersonalityManager,
    message_count: u8,
) -> RdmResponse {
    let Some(personality_number) = extract_uint8(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    let Some(personality) = manager.get(personality_number) else {
        return nack(request, NackReason::DataOutOfRange, message_count);
    };

    let mut buffer = [0u8; 35];
    let mut view = personality_description_layout::View::new(&mut buffer);
    view.personality_mut().write(personality_number);
    view.slots_required_mut().write(personality.footprint);
    write_fixed_str(view.description_mut(), personality.description);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

/// `GetDmxAddress` — stored start address, or the zero-footprint sentinel.
pub fn get_dmx_address(
    request: &RdmRequest,
    footprint: u16,
    start_address: u16,
    message_count: u8,
) -> RdmResponse {
    let address = if footprint == 0 {
        ZERO_FOOTPRINT_DMX_ADDRESS
    } else {
        start_address
    };

    ack(
        request,
        DataPack::from_slice(&address.to_be_bytes()).unwrap(),
        message_count,
    )
}

/// `SetDmxAddress`. Per Open Question #4, the range check runs before the
/// zero-footprint check, matching the original byte-for-byte.
pub fn set_dmx_address(
    request: &RdmRequest,
    footprint: u16,
    message_count: u8,
) -> Result<u16, RdmResponse> {
    let Some(address) = extract_uint16(&request.param_data) else {
        return Err(nack(request, NackReason::FormatError, message_count));
    };

    let end_address = 1 + DMX_UNIVERSE_SIZE - footprint;

    if address == 0 || address > end_address {
        return Err(nack(request, NackReason::DataOutOfRange, message_count));
    }

    if footprint == 0 {
        return Err(nack(request, NackReason::DataOutOfRange, message_count));
    }

    Ok(address)
}

/// `GetRealTimeClock` — wall-clock time is supplied by the caller, since
/// the core itself never reads the system clock directly (§6.4: no
/// environment access inside the core).
pub fn get_real_time_clock(
    request: &RdmRequest,
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    message_count: u8,
) -> RdmResponse {
    let mut buffer = [0u8; 7];
    let mut view = real_time_clock_layout::View::new(&mut buffer);
    view.year_mut().write(year);
    view.month_mut().write(month);
    view.day_mut().write(day);
    view.hour_mut().write(hour);
    view.minute_mut().write(minute);
    view.second_mut().write(second);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

/// `GetParamDescription` (and friends) for a manufacturer-specific PID.
#[allow(clippy::too_many_arguments)]
pub fn get_param_description(
    request: &RdmRequest,
    pid: u16,
    pdl_size: u8,
    data_type: u8,
    command_class: u8,
    unit: u8,
    prefix: u8,
    min_value: u32,
    default_value: u32,
    max_value: u32,
    description: &str,
    message_count: u8,
) -> RdmResponse {
    let mut buffer = [0u8; 0x14 + 32];
    let mut view = parameter_description_layout::View::new(&mut buffer);
    view.pid_mut().write(pid);
    view.pdl_size_mut().write(pdl_size);
    view.data_type_mut().write(data_type);
    view.command_class_mut().write(command_class);
    view.param_type_mut().write(0);
    view.unit_mut().write(unit);
    view.prefix_mut().write(prefix);
    view.min_value_mut().write(min_value);
    view.default_value_mut().write(default_value);
    view.max_value_mut().write(max_value);
    write_fixed_str(view.description_mut(), description);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

/// `GetString` — raw bytes, not null-terminated or padded.
pub fn get_string(request: &RdmRequest, value: &str, message_count: u8) -> RdmResponse {
    ack(
        request,
        DataPack::from_slice(value.as_bytes()).unwrap(),
        message_count,
    )
}

/// `SetString` — NACKs `FORMAT_ERROR` if longer than
/// [`MAX_RDM_STRING_LENGTH`], else decodes in place (the wire format
/// carries no length prefix; whatever bytes were sent are the string).
pub fn set_string(
    request: &RdmRequest,
    message_count: u8,
) -> Result<heapless::String<MAX_RDM_STRING_LENGTH>, RdmResponse> {
    if request.param_data.len() > MAX_RDM_STRING_LENGTH {
        return Err(nack(request, NackReason::FormatError, message_count));
    }

    let mut string = heapless::String::new();
    for &byte in request.param_data.iter() {
        string.push(byte as char).unwrap();
    }
    Ok(string)
}

/// `GetBoolValue`.
pub fn get_bool_value(request: &RdmRequest, value: bool, message_count: u8) -> RdmResponse {
    ack(
        request,
        DataPack::from_slice(&[value as u8]).unwrap(),
        message_count,
    )
}

/// `SetBoolValue` — only `0` or `1` accepted.
pub fn set_bool_value(request: &RdmRequest, message_count: u8) -> Result<bool, RdmResponse> {
    match extract_uint8(&request.param_data) {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        Some(_) => Err(nack(request, NackReason::DataOutOfRange, message_count)),
        None => Err(nack(request, NackReason::FormatError, message_count)),
    }
}

pub fn get_uint8(request: &RdmRequest, value: u8, message_count: u8) -> RdmResponse {
    ack(
        request,
        DataPack::from_slice(&[value]).unwrap(),
        message_count,
    )
}

pub fn set_uint8(request: &RdmRequest, message_count: u8) -> Result<u8, RdmResponse> {
    extract_uint8(&request.param_data).ok_or_else(|| nack(request, NackReason::FormatError, message_count))
}

pub fn get_uint16(request: &RdmRequest, value: u16, message_count: u8) -> RdmResponse {
    ack(
        request,
        DataPack::from_slice(&value.to_be_bytes()).unwrap(),
        message_count,
    )
}

pub fn set_uint16(request: &RdmRequest, message_count: u8) -> Result<u16, RdmResponse> {
    extract_uint16(&request.param_data)
        .ok_or_else(|| nack(request, NackReason::FormatError, message_count))
}

pub fn get_uint32(request: &RdmRequest, value: u32, message_count: u8) -> RdmResponse {
    ack(
        request,
        DataPack::from_slice(&value.to_be_bytes()).unwrap(),
        message_count,
    )
}

pub fn set_uint32(request: &RdmRequest, message_count: u8) -> Result<u32, RdmResponse> {
    extract_uint32(&request.param_data)
        .ok_or_else(|| nack(request, NackReason::FormatError, message_count))
}

/// `GetSensorDefinition` — `0xFF` is rejected here (it only makes sense for
/// value/record operations, matching the original).
pub fn get_sensor_definition(
    request: &RdmRequest,
    sensors: &[Sensor],
    message_count: u8,
) -> RdmResponse {
    let Some(sensor_number) = extract_uint8(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    let Some(sensor) = sensors.get(sensor_number as usize) else {
        return nack(request, NackReason::DataOutOfRange, message_count);
    };

    let definition = &sensor.definition;
    let mut data = DataPack::new();
    data.push(sensor_number).unwrap();
    data.push(definition.kind).unwrap();
    data.push(definition.unit).unwrap();
    data.push(definition.prefix).unwrap();
    data.extend_from_slice(&definition.range_min.to_be_bytes())
        .unwrap();
    data.extend_from_slice(&definition.range_max.to_be_bytes())
        .unwrap();
    data.extend_from_slice(&definition.normal_min.to_be_bytes())
        .unwrap();
    data.extend_from_slice(&definition.normal_max.to_be_bytes())
        .unwrap();
    data.push(definition.recorded_value_support).unwrap();
    data.extend_from_slice(
        &definition.description.as_bytes()[..definition.description.len().min(MAX_RDM_STRING_LENGTH)],
    )
    .unwrap();

    ack(request, data, message_count)
}

fn serialize_sensor_value(sensor_number: u8, sensor: &Sensor) -> [u8; 9] {
    let mut buffer = [0u8; 9];
    let mut view = sensor_value_layout::View::new(&mut buffer);
    view.sensor_mut().write(sensor_number);
    view.value_mut().write(sensor.value());
    view.lowest_mut().write(sensor.lowest());
    view.highest_mut().write(sensor.highest());
    view.recorded_mut().write(sensor.recorded());
    buffer
}

/// `GetSensorValue` — `0xFF` addresses all sensors are rejected by the
/// original for GET; only a concrete sensor number is accepted.
pub fn get_sensor_value(
    request: &RdmRequest,
    sensors: &[Sensor],
    message_count: u8,
) -> RdmResponse {
    let Some(sensor_number) = extract_uint8(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    let Some(sensor) = sensors.get(sensor_number as usize) else {
        return nack(request, NackReason::DataOutOfRange, message_count);
    };

    ack(
        request,
        DataPack::from_slice(&serialize_sensor_value(sensor_number, sensor)).unwrap(),
        message_count,
    )
}

/// `SetSensorValue` — any data beyond the sensor number resets it;
/// otherwise it behaves as a reset-then-report, per the original. Returns
/// the index to reset on success.
pub fn set_sensor_value(
    request: &RdmRequest,
    sensors: &[Sensor],
    message_count: u8,
) -> Result<usize, RdmResponse> {
    let Some(sensor_number) = extract_uint8(&request.param_data) else {
        return Err(nack(request, NackReason::FormatError, message_count));
    };

    if sensors.get(sensor_number as usize).is_none() {
        return Err(nack(request, NackReason::DataOutOfRange, message_count));
    }

    Ok(sensor_number as usize)
}

/// `RecordSensor` — `0xFF` records every sensor, otherwise a single index.
pub fn record_sensor_target(
    request: &RdmRequest,
    sensor_count: usize,
    message_count: u8,
) -> Result<RecordSensorTarget, RdmResponse> {
    let Some(sensor_number) = extract_uint8(&request.param_data) else {
        return Err(nack(request, NackReason::FormatError, message_count));
    };

    if sensor_number == 0xFF {
        return Ok(RecordSensorTarget::All);
    }

    if sensor_number as usize >= sensor_count {
        return Err(nack(request, NackReason::DataOutOfRange, message_count));
    }

    Ok(RecordSensorTarget::Single(sensor_number as usize))
}

pub enum RecordSensorTarget {
    Single(usize),
    All,
}

fn write_fixed_str(mut view: impl AsMut<[u8]>, value: &str) {
    let bytes = value.as_bytes();
    let dest = view.as_mut();
    let len = bytes.len().min(dest.len());
    dest[..len].copy_from_slice(&bytes[..len]);
}

/// `DIMMER_INFO` (E1.37-1).
#[allow(clippy::too_many_arguments)]
pub fn get_dimmer_info(
    request: &RdmRequest,
    min_level_lower: u16,
    min_level_upper: u16,
    max_level_lower: u16,
    max_level_upper: u16,
    curve_count: u8,
    level_resolution: u8,
    level_support: u8,
    message_count: u8,
) -> RdmResponse {
    let mut buffer = [0u8; 11];
    let mut view = dimmer_info_layout::View::new(&mut buffer);
    view.min_level_lower_mut().write(min_level_lower);
    view.min_level_upper_mut().write(min_level_upper);
    view.max_level_lower_mut().write(max_level_lower);
    view.max_level_upper_mut().write(max_level_upper);
    view.curve_count_mut().write(curve_count);
    view.level_resolution_mut().write(level_resolution);
    view.level_support_mut().write(level_support);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

/// `MINIMUM_LEVEL`.
pub fn get_minimum_level(
    request: &RdmRequest,
    increasing: u16,
    decreasing: u16,
    on_below_min: bool,
    message_count: u8,
) -> RdmResponse {
    let mut buffer = [0u8; 5];
    let mut view = minimum_level_layout::View::new(&mut buffer);
    view.min_level_increasing_mut().write(increasing);
    view.min_level_decreasing_mut().write(decreasing);
    view.on_below_min_mut().write(on_below_min as u8);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

pub struct MinimumLevel {
    pub increasing: u16,
    pub decreasing: u16,
    pub on_below_min: bool,
}

pub fn set_minimum_level(
    request: &RdmRequest,
    message_count: u8,
) -> Result<MinimumLevel, RdmResponse> {
    if request.param_data.len() != 5 {
        return Err(nack(request, NackReason::FormatError, message_count));
    }

    let view = minimum_level_layout::View::new(&request.param_data[..]);
    let on_below_min = match view.on_below_min().read() {
        0 => false,
        1 => true,
        _ => return Err(nack(request, NackReason::DataOutOfRange, message_count)),
    };

    Ok(MinimumLevel {
        increasing: view.min_level_increasing().read(),
        decreasing: view.min_level_decreasing().read(),
        on_below_min,
    })
}

/// `PRESET_PLAYBACK`.
pub fn get_preset_playback(
    request: &RdmRequest,
    mode: u16,
    level: u8,
    message_count: u8,
) -> RdmResponse {
    let mut buffer = [0u8; 3];
    let mut view = preset_playback_layout::View::new(&mut buffer);
    view.mode_mut().write(mode);
    view.level_mut().write(level);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

pub struct PresetPlayback {
    pub mode: u16,
    pub level: u8,
}

pub fn set_preset_playback(
    request: &RdmRequest,
    message_count: u8,
) -> Result<PresetPlayback, RdmResponse> {
    if request.param_data.len() != 3 {
        return Err(nack(request, NackReason::FormatError, message_count));
    }

    let view = preset_playback_layout::View::new(&request.param_data[..]);
    Ok(PresetPlayback {
        mode: view.mode().read(),
        level: view.level().read(),
    })
}

/// `PRESET_STATUS`.
pub struct PresetStatus {
    pub scene: u16,
    pub fade_up_time: u16,
    pub fade_down_time: u16,
    pub wait_time: u16,
    pub programmed: u8,
}

pub fn get_preset_status(request: &RdmRequest, status: &PresetStatus, message_count: u8) -> RdmResponse {
    let mut buffer = [0u8; 9];
    let mut view = preset_status_layout::View::new(&mut buffer);
    view.scene_mut().write(status.scene);
    view.fade_up_time_mut().write(status.fade_up_time);
    view.fade_down_time_mut().write(status.fade_down_time);
    view.wait_time_mut().write(status.wait_time);
    view.programmed_mut().write(status.programmed);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

/// `SetPresetStatus`. `read_only_scene` (slot 0 on every responder that uses
/// this) always NACKs `WRITE_PROTECT`; any scene outside `[1, scene_count)`
/// NACKs `DATA_OUT_OF_RANGE`.
pub fn set_preset_status(
    request: &RdmRequest,
    scene_count: u16,
    read_only_scene: u16,
    message_count: u8,
) -> Result<PresetStatus, RdmResponse> {
    if request.param_data.len() != 9 {
        return Err(nack(request, NackReason::FormatError, message_count));
    }

    let view = preset_status_layout::View::new(&request.param_data[..]);
    let scene = view.scene().read();

    if scene == 0 || scene >= scene_count {
        return Err(nack(request, NackReason::DataOutOfRange, message_count));
    }

    if scene == read_only_scene {
        return Err(nack(request, NackReason::WriteProtect, message_count));
    }

    Ok(PresetStatus {
        scene,
        fade_up_time: view.fade_up_time().read(),
        fade_down_time: view.fade_down_time().read(),
        wait_time: view.wait_time().read(),
        programmed: view.programmed().read(),
    })
}

/// `PRESET_INFO` — a fixed, responder-wide-static record of what preset
/// features are available and the valid range for every time field.
#[allow(clippy::too_many_arguments)]
pub struct PresetInfo {
    pub level_field_supported: bool,
    pub preset_sequence_supported: bool,
    pub split_times_supported: bool,
    pub dmx_fail_infinite_delay_supported: bool,
    pub dmx_fail_infinite_hold_supported: bool,
    pub startup_infinite_hold_supported: bool,
    pub max_scene_number: u16,
    pub min_preset_fade_time: u16,
    pub max_preset_fade_time: u16,
    pub min_preset_wait_time: u16,
    pub max_preset_wait_time: u16,
    pub min_fail_delay_time: u16,
    pub max_fail_delay_time: u16,
    pub min_fail_hold_time: u16,
    pub max_fail_hold_time: u16,
    pub min_startup_delay_time: u16,
    pub max_startup_delay_time: u16,
    pub min_startup_hold_time: u16,
    pub max_startup_hold_time: u16,
}

pub fn get_preset_info(request: &RdmRequest, info: &PresetInfo, message_count: u8) -> RdmResponse {
    let mut buffer = [0u8; 32];
    let mut view = preset_info_layout::View::new(&mut buffer);
    view.level_field_supported_mut()
        .write(info.level_field_supported as u8);
    view.preset_sequence_supported_mut()
        .write(info.preset_sequence_supported as u8);
    view.split_times_supported_mut()
        .write(info.split_times_supported as u8);
    view.dmx_fail_infinite_delay_supported_mut()
        .write(info.dmx_fail_infinite_delay_supported as u8);
    view.dmx_fail_infinite_hold_supported_mut()
        .write(info.dmx_fail_infinite_hold_supported as u8);
    view.startup_infinite_hold_supported_mut()
        .write(info.startup_infinite_hold_supported as u8);
    view.max_scene_number_mut().write(info.max_scene_number);
    view.min_preset_fade_time_mut().write(info.min_preset_fade_time);
    view.max_preset_fade_time_mut().write(info.max_preset_fade_time);
    view.min_preset_wait_time_mut().write(info.min_preset_wait_time);
    view.max_preset_wait_time_mut().write(info.max_preset_wait_time);
    view.min_fail_delay_time_mut().write(info.min_fail_delay_time);
    view.max_fail_delay_time_mut().write(info.max_fail_delay_time);
    view.min_fail_hold_time_mut().write(info.min_fail_hold_time);
    view.max_fail_hold_time_mut().write(info.max_fail_hold_time);
    view.min_startup_delay_time_mut()
        .write(info.min_startup_delay_time);
    view.max_startup_delay_time_mut()
        .write(info.max_startup_delay_time);
    view.min_startup_hold_time_mut()
        .write(info.min_startup_hold_time);
    view.max_startup_hold_time_mut()
        .write(info.max_startup_hold_time);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

/// `FAIL_MODE` / `STARTUP_MODE`.
pub struct FailOrStartupMode {
    pub scene: u16,
    pub delay: u16,
    pub hold_time: u16,
    pub level: u8,
}

pub fn get_fail_or_startup_mode(
    request: &RdmRequest,
    mode: &FailOrStartupMode,
    message_count: u8,
) -> RdmResponse {
    let mut buffer = [0u8; 7];
    let mut view = fail_startup_mode_layout::View::new(&mut buffer);
    view.scene_mut().write(mode.scene);
    view.delay_mut().write(mode.delay);
    view.hold_time_mut().write(mode.hold_time);
    view.level_mut().write(mode.level);

    ack(request, DataPack::from_slice(&buffer).unwrap(), message_count)
}

pub fn set_fail_or_startup_mode(
    request: &RdmRequest,
    message_count: u8,
) -> Result<FailOrStartupMode, RdmResponse> {
    if request.param_data.len() != 7 {
        return Err(nack(request, NackReason::FormatError, message_count));
    }

    let view = fail_startup_mode_layout::View::new(&request.param_data[..]);
    Ok(FailOrStartupMode {
        scene: view.scene().read(),
        delay: view.delay().read(),
        hold_time: view.hold_time().read(),
        level: view.level().read(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::unique_identifier::{PackageAddress, UniqueIdentifier};

    fn request(param_data: &[u8]) -> RdmRequest {
        RdmRequest {
            source_uid: UniqueIdentifier::new(0x7a70, 1).unwrap(),
            destination_uid: PackageAddress::Device(UniqueIdentifier::new(0x7a70, 2).unwrap()),
            transaction_number: 1,
            port_id: 1,
            sub_device: 0,
            command_class: RequestCommandClass::GetCommand,
            param_id: 0,
            param_data: DataPack::from_slice(param_data).unwrap(),
        }
    }

    #[test]
    fn set_dmx_address_rejects_zero() {
        let req = request(&[0x00, 0x00]);
        set_dmx_address(&req, 10, 0).unwrap_err();
    }

    #[test]
    fn set_dmx_address_rejects_overrun() {
        let req = request(&504u16.to_be_bytes());
        set_dmx_address(&req, 10, 0).unwrap_err();
    }

    #[test]
    fn set_dmx_address_accepts_boundary() {
        let req = request(&503u16.to_be_bytes());
        assert_eq!(set_dmx_address(&req, 10, 0).unwrap(), 503);
    }

    #[test]
    fn set_dmx_address_rejects_on_zero_footprint() {
        let req = request(&1u16.to_be_bytes());
        set_dmx_address(&req, 0, 0).unwrap_err();
    }

    #[test]
    fn set_dmx_address_rejects_near_u16_max_without_wraparound() {
        let req = request(&65530u16.to_be_bytes());
        set_dmx_address(&req, 10, 0).unwrap_err();
    }

    #[test]
    fn set_string_rejects_overlong() {
        let req = request(&[b'a'; 33]);
        set_string(&req, 0).unwrap_err();
    }

    #[test]
    fn set_string_decodes_raw_bytes() {
        let req = request(b"hello");
        assert_eq!(set_string(&req, 0).unwrap(), "hello");
    }

    #[test]
    fn set_bool_value_only_accepts_zero_or_one() {
        assert!(!set_bool_value(&request(&[0]), 0).unwrap());
        assert!(set_bool_value(&request(&[1]), 0).unwrap());
        set_bool_value(&request(&[2]), 0).unwrap_err();
    }

    fn preset_status_data(scene: u16) -> [u8; 9] {
        let mut buffer = [0u8; 9];
        let mut view = preset_status_layout::View::new(&mut buffer);
        view.scene_mut().write(scene);
        buffer
    }

    #[test]
    fn set_preset_status_rejects_read_only_scene() {
        let req = request(&preset_status_data(0));
        assert_eq!(
            set_preset_status(&req, 6, 0, 0).unwrap_err().response_type,
            crate::types::ResponseType::ResponseTypeNackReason
        );
    }

    #[test]
    fn set_preset_status_accepts_writable_scene() {
        let req = request(&preset_status_data(2));
        assert_eq!(set_preset_status(&req, 6, 0, 0).unwrap().scene, 2);
    }

    #[test]
    fn set_preset_status_rejects_out_of_range_scene() {
        let req = request(&preset_status_data(6));
        set_preset_status(&req, 6, 0, 0).unwrap_err();
    }
}
