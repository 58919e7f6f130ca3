//! A simulated moving light with a pan/tilt yoke: four footprints, lamp
//! strike counting, identify, and a manufacturer PID reporting the build's
//! own version string.

use crate::personality::{Personality, PersonalityCollection, PersonalityManager};
use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::responder_helper as helper;
use crate::responder_helper::DeviceInfoFields;
use crate::responder_ops::{DispatchOutcome, MessageCounted, ParamHandler, ResponderOps};
use crate::responders::{software_version_label, MANUFACTURER_LABEL};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

const DEVICE_MODEL_ID: u16 = 5;
const PRODUCT_CATEGORY_FIXTURE_MOVING_YOKE: u16 = 0x0102;

const DS_ASCII: u8 = 0x02;
const CC_GET: u8 = 0x01;
const UNITS_NONE: u8 = 0x00;
const PREFIX_NONE: u8 = 0x00;

static PERSONALITIES: [Personality; 4] = [
    Personality::new(0, "Personality 1"),
    Personality::new(5, "Personality 2"),
    Personality::new(10, "Personality 3"),
    Personality::new(20, "Personality 4"),
];
static PERSONALITY_COLLECTION: PersonalityCollection = PersonalityCollection::new(&PERSONALITIES);

static HANDLERS: [ParamHandler<MovingLightResponder>; 17] = [
    ParamHandler::get_only(pids::PARAMETER_DESCRIPTION, get_param_description),
    ParamHandler::get_only(pids::DEVICE_INFO, get_device_info),
    ParamHandler::get_only(pids::PRODUCT_DETAIL_ID_LIST, get_product_detail_list),
    ParamHandler::get_only(pids::DEVICE_MODEL_DESCRIPTION, get_device_model_description),
    ParamHandler::get_only(pids::MANUFACTURER_LABEL, get_manufacturer_label),
    ParamHandler::get_only(pids::DEVICE_LABEL, get_device_label),
    ParamHandler::get_set(pids::FACTORY_DEFAULTS, get_factory_defaults, set_factory_defaults),
    ParamHandler::get_only(pids::SOFTWARE_VERSION_LABEL, get_software_version_label),
    ParamHandler::get_set(pids::DMX_PERSONALITY, get_personality, set_personality),
    ParamHandler::get_only(pids::DMX_PERSONALITY_DESCRIPTION, get_personality_description),
    ParamHandler::get_set(pids::DMX_START_ADDRESS, get_dmx_start_address, set_dmx_start_address),
    ParamHandler::get_set(pids::LAMP_STRIKES, get_lamp_strikes, set_lamp_strikes),
    ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify),
    ParamHandler::get_set(pids::PAN_INVERT, get_pan_invert, set_pan_invert),
    ParamHandler::get_set(pids::TILT_INVERT, get_tilt_invert, set_tilt_invert),
    ParamHandler::get_only(pids::REAL_TIME_CLOCK, get_real_time_clock),
    ParamHandler::get_only(pids::OLA_MANUFACTURER_PID_CODE_VERSION, get_ola_code_version),
];

static OPS: ResponderOps<MovingLightResponder> = ResponderOps::new(&HANDLERS);

pub struct MovingLightResponderConfig {
    pub uid: UniqueIdentifier,
}

pub struct MovingLightResponder {
    uid: UniqueIdentifier,
    start_address: u16,
    identify_mode: bool,
    pan_invert: bool,
    tilt_invert: bool,
    lamp_strikes: u32,
    personality_manager: PersonalityManager,
}

impl MessageCounted for MovingLightResponder {
    fn message_count(&self) -> u8 {
        0
    }
}

impl MovingLightResponder {
    pub fn new(config: MovingLightResponderConfig) -> Self {
        Self {
            uid: config.uid,
            start_address: 1,
            identify_mode: false,
            pan_invert: false,
            tilt_invert: false,
            lamp_strikes: 0,
            personality_manager: PersonalityManager::new(&PERSONALITY_COLLECTION, 1),
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

/// Only PID this dummy responder accepts in `PARAMETER_DESCRIPTION` is its
/// own manufacturer PID, since it's the only manufacturer-specific one it
/// exposes.
fn get_param_description(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let Some(parameter_id) = helper::extract_uint16(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    if parameter_id != pids::OLA_MANUFACTURER_PID_CODE_VERSION {
        return nack(request, NackReason::DataOutOfRange, message_count);
    }

    helper::get_param_description(
        request,
        pids::OLA_MANUFACTURER_PID_CODE_VERSION,
        crate::consts::MAX_RDM_STRING_LENGTH as u8,
        DS_ASCII,
        CC_GET,
        UNITS_NONE,
        PREFIX_NONE,
        0,
        0,
        0,
        "Code Version",
        message_count,
    )
}

fn get_device_info(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    let fields = DeviceInfoFields {
        device_model_id: DEVICE_MODEL_ID,
        product_category: PRODUCT_CATEGORY_FIXTURE_MOVING_YOKE,
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

fn get_product_detail_list(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_product_detail_list(request, &[crate::responders::PRODUCT_DETAIL_TEST], target.message_count())
}

fn get_device_model_description(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_string(request, "OLA Moving Light", target.message_count())
}

fn get_manufacturer_label(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_string(request, MANUFACTURER_LABEL, target.message_count())
}

fn get_device_label(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_string(request, "Dummy Moving Light", target.message_count())
}

fn get_factory_defaults(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    let using_defaults = target.start_address == 1
        && target.personality_manager.active_personality_number() == 1
        && !target.identify_mode;
    helper::get_bool_value(request, using_defaults, target.message_count())
}

fn set_factory_defaults(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, message_count);
    }

    target.start_address = 1;
    target.personality_manager = PersonalityManager::new(&PERSONALITY_COLLECTION, 1);
    target.identify_mode = false;
    helper::empty_set_response(request, message_count)
}

fn get_software_version_label(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_string(request, software_version_label().as_str(), target.message_count())
}

fn get_personality(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_personality(request, &target.personality_manager, target.message_count())
}

fn set_personality(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let start_address = target.start_address;
    helper::set_personality(request, &mut target.personality_manager, start_address, message_count)
}

fn get_personality_description(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_personality_description(request, &target.personality_manager, target.message_count())
}

fn get_dmx_start_address(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_dmx_address(request, target.footprint(), target.start_address, target.message_count())
}

fn set_dmx_start_address(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
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

fn get_lamp_strikes(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_uint32(request, target.lamp_strikes, target.message_count())
}

fn set_lamp_strikes(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_uint32(request, message_count) {
        Ok(strikes) => {
            target.lamp_strikes = strikes;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_identify(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_bool_value(request, target.identify_mode, target.message_count())
}

fn set_identify(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(state) => {
            target.identify_mode = state;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_pan_invert(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_bool_value(request, target.pan_invert, target.message_count())
}

fn set_pan_invert(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(state) => {
            target.pan_invert = state;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_tilt_invert(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_bool_value(request, target.tilt_invert, target.message_count())
}

fn set_tilt_invert(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(state) => {
            target.tilt_invert = state;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_real_time_clock(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_real_time_clock(request, 1970, 1, 1, 0, 0, 0, target.message_count())
}

fn get_ola_code_version(target: &mut MovingLightResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_string(request, software_version_label().as_str(), target.message_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::types::ResponseType;
    use crate::unique_identifier::PackageAddress;

    fn responder() -> MovingLightResponder {
        MovingLightResponder::new(MovingLightResponderConfig {
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
    fn device_info_reports_zero_footprint_for_personality_one() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::DEVICE_INFO, &[]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[10..12], &0u16.to_be_bytes());
                assert_eq!(&response.param_data[14..16], &0xffffu16.to_be_bytes());
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn set_personality_switches_active_footprint() {
        let mut responder = responder();
        let req = request(RequestCommandClass::SetCommand, pids::DMX_PERSONALITY, &[2]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => assert_eq!(response.response_type, ResponseType::ResponseTypeAck),
            _ => panic!("expected an ACK"),
        }
        assert_eq!(responder.personality_manager.active_footprint(), 5);
    }

    #[test]
    fn set_lamp_strikes_round_trips() {
        let mut responder = responder();
        let set_req = request(RequestCommandClass::SetCommand, pids::LAMP_STRIKES, &100u32.to_be_bytes());
        responder.send_rdm_request(&set_req);

        let get_req = request(RequestCommandClass::GetCommand, pids::LAMP_STRIKES, &[]);
        match responder.send_rdm_request(&get_req) {
            DispatchOutcome::Response(response) => assert_eq!(&response.param_data[..], &100u32.to_be_bytes()),
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn param_description_rejects_unknown_pid() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::PARAMETER_DESCRIPTION, &pids::DEVICE_INFO.to_be_bytes());

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::DataOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }

    #[test]
    fn factory_defaults_reports_true_on_construction() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::FACTORY_DEFAULTS, &[]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => assert_eq!(response.param_data[0], 1),
            _ => panic!("expected an ACK"),
        }
    }
}
