//! The root device of a multi-sub-device dimmer bank. Carries no footprint
//! of its own; `PID_DEVICE_INFO` only reports how many sub-devices hang off
//! it. Sub-devices are independent [`super::dimmer_sub_device::DimmerSubDevice`]
//! instances dispatched to directly by whatever owns the UID table — this
//! type does not route requests to them itself.

use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::responder_helper as helper;
use crate::responder_helper::DeviceInfoFields;
use crate::responder_ops::{MessageCounted, ParamHandler, ResponderOps};
use crate::responders::{MANUFACTURER_LABEL, PRODUCT_CATEGORY_DIMMER, PRODUCT_DETAIL_TEST};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

const DEVICE_MODEL_ID: u16 = 0x0002;

static HANDLERS: [ParamHandler<DimmerRootDevice>; 6] = [
    ParamHandler::get_only(pids::DEVICE_INFO, get_device_info),
    ParamHandler::get_only(pids::PRODUCT_DETAIL_ID_LIST, get_product_detail_list),
    ParamHandler::get_only(pids::DEVICE_MODEL_DESCRIPTION, get_device_model_description),
    ParamHandler::get_only(pids::MANUFACTURER_LABEL, get_manufacturer_label),
    ParamHandler::get_only(pids::DEVICE_LABEL, get_device_label),
    ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify),
];

static OPS: ResponderOps<DimmerRootDevice> = ResponderOps::new(&HANDLERS);

pub struct DimmerRootDeviceConfig {
    pub uid: UniqueIdentifier,
    pub sub_device_count: u16,
}

pub struct DimmerRootDevice {
    uid: UniqueIdentifier,
    sub_device_count: u16,
    identify_mode: bool,
}

impl MessageCounted for DimmerRootDevice {
    fn message_count(&self) -> u8 {
        0
    }
}

impl DimmerRootDevice {
    pub fn new(config: DimmerRootDeviceConfig) -> Self {
        Self {
            uid: config.uid,
            sub_device_count: config.sub_device_count,
            identify_mode: false,
        }
    }

    pub fn send_rdm_request(&mut self, request: &RdmRequest) -> crate::responder_ops::DispatchOutcome {
        OPS.handle_rdm_request(self, self.uid, 0, request)
    }
}

fn get_device_info(target: &mut DimmerRootDevice, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return request
            .nack_response(NackReason::FormatError, target.message_count())
            .expect("dispatcher guarantees a unicast destination before invoking handlers");
    }

    let fields = DeviceInfoFields {
        device_model_id: DEVICE_MODEL_ID,
        product_category: PRODUCT_CATEGORY_DIMMER,
        software_version: 1,
        sub_device_count: target.sub_device_count,
        sensor_count: 0,
    };

    helper::get_device_info_raw(request, &fields, 0, 1, 1, 0, target.message_count())
}

fn get_product_detail_list(target: &mut DimmerRootDevice, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return request
            .nack_response(NackReason::FormatError, target.message_count())
            .expect("dispatcher guarantees a unicast destination before invoking handlers");
    }

    helper::get_product_detail_list(request, &[PRODUCT_DETAIL_TEST], target.message_count())
}

fn get_device_model_description(target: &mut DimmerRootDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "OLA Dimmer", target.message_count())
}

fn get_manufacturer_label(target: &mut DimmerRootDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, MANUFACTURER_LABEL, target.message_count())
}

fn get_device_label(target: &mut DimmerRootDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "Dummy Dimmer", target.message_count())
}

fn get_identify(target: &mut DimmerRootDevice, request: &RdmRequest) -> RdmResponse {
    helper::get_bool_value(request, target.identify_mode, target.message_count())
}

fn set_identify(target: &mut DimmerRootDevice, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(identify) => {
            target.identify_mode = identify;
            helper::empty_set_response(request, message_count)
        },
        Err(nack) => nack,
    }
}
