//! A single channel of a dimmer bank, addressed as its own RDM sub-device.
//! Fixed at one DMX slot; personality negotiation isn't exposed over RDM
//! here (the original declares the machinery but never wires it into its
//! dispatch table, so neither do we).

use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::responder_helper as helper;
use crate::responder_helper::DeviceInfoFields;
use crate::responder_ops::{DispatchOutcome, MessageCounted, ParamHandler, ResponderOps};
use crate::responders::{MANUFACTURER_LABEL, PRODUCT_CATEGORY_DIMMER, PRODUCT_DETAIL_TEST};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

const DEVICE_MODEL_ID: u16 = 0x0003;
const FOOTPRINT: u16 = 1;

static HANDLERS: [ParamHandler<DimmerSubDevice>; 8] = [
    ParamHandler::get_only(pids::DEVICE_INFO, get_device_info),
    ParamHandler::get_only(pids::PRODUCT_DETAIL_ID_LIST, get_product_detail_list),
    ParamHandler::get_only(pids::DEVICE_MODEL_DESCRIPTION, get_device_model_description),
    ParamHandler::get_only(pids::MANUFACTURER_LABEL, get_manufacturer_label),
    ParamHandler::get_only(pids::DEVICE_LABEL, get_device_label),
    ParamHandler::get_only(pids::SOFTWARE_VERSION_LABEL, get_software_version_label),
    ParamHandler::get_set(pids::DMX_START_ADDRESS, get_dmx_start_address, set_dmx_start_address),
    ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify),
];

static OPS: ResponderOps<DimmerSubDevice> = ResponderOps::new(&HANDLERS);

pub struct DimmerSubDeviceConfig {
    pub uid: UniqueIdentifier,
    pub sub_device_number: u16,
}

pub struct DimmerSubDevice {
    uid: UniqueIdentifier,
    sub_device_number: u16,
    start_address: u16,
    identify_mode: bool,
}

impl MessageCounted for DimmerSubDevice {
    fn message_count(&self) -> u8 {
        0
    }
}

impl DimmerSubDevice {
    pub fn new(config: DimmerSubDeviceConfig) -> Self {
        Self {
            uid: config.uid,
            sub_device_number: config.sub_device_number,
            start_address: 1,
            identify_mode: false,
        }
    }

    pub fn footprint(&self) -> u16 {
        FOOTPRINT
    }

    pub fn send_rdm_request(&mut self, request: &RdmRequest) -> DispatchOutcome {
        OPS.handle_rdm_request(self, self.uid, self.sub_device_number, request)
    }
}

fn get_device_info(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return request
            .nack_response(NackReason::FormatError, target.message_count())
            .expect("dispatcher guarantees a unicast destination before invoking handlers");
    }

    let fields = DeviceInfoFields {
        device_model_id: DEVICE_MODEL_ID,
        product_category: PRODUCT_CATEGORY_DIMMER,
        software_version: 1,
        sub_device_count: 0,
        sensor_count: 0,
    };

    helper::get_device_info_raw(request, &fields, FOOTPRINT, 1, 1, target.start_address, target.message_count())
}

fn get_product_detail_list(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return request
            .nack_response(NackReason::FormatError, target.message_count())
            .expect("dispatcher guarantees a unicast destination before invoking handlers");
    }

    helper::get_product_detail_list(request, &[PRODUCT_DETAIL_TEST], target.message_count())
}

fn get_device_model_description(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "OLA Dimmer", target.message_count())
}

fn get_manufacturer_label(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, MANUFACTURER_LABEL, target.message_count())
}

fn get_device_label(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "Dummy Dimmer", target.message_count())
}

fn get_software_version_label(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, crate::responders::software_version_label().as_str(), target.message_count())
}

fn get_dmx_start_address(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return request
            .nack_response(NackReason::FormatError, target.message_count())
            .expect("dispatcher guarantees a unicast destination before invoking handlers");
    }

    helper::get_dmx_address(request, FOOTPRINT, target.start_address, target.message_count())
}

/// Unlike [`crate::responder_helper::set_dmx_address`], the original rejects
/// only `0` and anything past the raw universe size — footprint never
/// factors in since it's fixed at one slot.
fn set_dmx_start_address(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let Some(address) = helper::extract_uint16(&request.param_data) else {
        return request
            .nack_response(NackReason::FormatError, message_count)
            .expect("dispatcher guarantees a unicast destination before invoking handlers");
    };

    if address == 0 || address > crate::consts::DMX_UNIVERSE_SIZE {
        return request
            .nack_response(NackReason::DataOutOfRange, message_count)
            .expect("dispatcher guarantees a unicast destination before invoking handlers");
    }

    target.start_address = address;
    helper::empty_set_response(request, message_count)
}

fn get_identify(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_bool_value(request, target.identify_mode, target.message_count())
}

fn set_identify(target: &mut DimmerSubDevice, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(identify) => {
            target.identify_mode = identify;
            helper::empty_set_response(request, message_count)
        },
        Err(nack) => nack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::unique_identifier::PackageAddress;

    fn responder() -> DimmerSubDevice {
        DimmerSubDevice::new(DimmerSubDeviceConfig {
            uid: UniqueIdentifier::new(0x7a70, 1).unwrap(),
            sub_device_number: 1,
        })
    }

    fn request(command_class: RequestCommandClass, param_id: u16, param_data: &[u8]) -> RdmRequest {
        RdmRequest {
            source_uid: UniqueIdentifier::new(0x7a70, 9).unwrap(),
            destination_uid: PackageAddress::Device(UniqueIdentifier::new(0x7a70, 1).unwrap()),
            transaction_number: 1,
            port_id: 1,
            sub_device: 1,
            command_class,
            param_id,
            param_data: DataPack::from_slice(param_data).unwrap(),
        }
    }

    #[test]
    fn device_info_reports_fixed_footprint() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::DEVICE_INFO, &[]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[10..12], &1u16.to_be_bytes());
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn set_dmx_start_address_rejects_zero() {
        let mut responder = responder();
        let req = request(RequestCommandClass::SetCommand, pids::DMX_START_ADDRESS, &[0x00, 0x00]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::DataOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }

    #[test]
    fn set_dmx_start_address_accepts_universe_boundary() {
        let mut responder = responder();
        let req = request(
            RequestCommandClass::SetCommand,
            pids::DMX_START_ADDRESS,
            &crate::consts::DMX_UNIVERSE_SIZE.to_be_bytes(),
        );

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.response_type, crate::types::ResponseType::ResponseTypeAck);
            },
            _ => panic!("expected an ACK"),
        }
        assert_eq!(responder.start_address, crate::consts::DMX_UNIVERSE_SIZE);
    }

    #[test]
    fn sub_device_routes_by_its_own_number() {
        let mut responder = responder();
        let mut req = request(RequestCommandClass::GetCommand, pids::DEVICE_LABEL, &[]);
        req.sub_device = 2;

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::SubDeviceOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }
}
