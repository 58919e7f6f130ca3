//! A footprint-less responder with nothing but sensors: a fake
//! temperature, a fake voltage and a fake particle counter, each polled
//! with a simple linear-congruential generator standing in for a real
//! peripheral reading.

use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::responder_helper as helper;
use crate::responder_helper::{DeviceInfoFields, RecordSensorTarget};
use crate::responder_ops::{DispatchOutcome, MessageCounted, ParamHandler, ResponderOps};
use crate::responders::{MANUFACTURER_LABEL, PRODUCT_CATEGORY_TEST, PRODUCT_DETAIL_TEST};
use crate::sensor::{Sensor, SensorDefinition, SUPPORTS_RECORDED_RANGE, SUPPORTS_RECORDED_VALUE};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

const DEVICE_MODEL_ID: u16 = 7;

const SENSOR_TEMPERATURE: u8 = 0x00;
const SENSOR_VOLTAGE: u8 = 0x01;
const SENSOR_ITEMS: u8 = 0x20;
const UNITS_CENTIGRADE: u8 = 0x01;
const UNITS_VOLTS_DC: u8 = 0x04;
const UNITS_NONE: u8 = 0x00;
const PREFIX_NONE: u8 = 0x00;
const PREFIX_DECI: u8 = 0x01;
const PREFIX_KILO: u8 = 0x13;

const SENSOR_COUNT: usize = 3;
const RECORDED_SUPPORT: u8 = SUPPORTS_RECORDED_RANGE | SUPPORTS_RECORDED_VALUE;

static SENSOR_DEFINITIONS: [SensorDefinition; SENSOR_COUNT] = [
    SensorDefinition {
        kind: SENSOR_TEMPERATURE,
        unit: UNITS_CENTIGRADE,
        prefix: PREFIX_NONE,
        range_min: 0,
        range_max: 100,
        normal_min: 10,
        normal_max: 20,
        recorded_value_support: RECORDED_SUPPORT,
        description: "Fake Temperature",
    },
    SensorDefinition {
        kind: SENSOR_VOLTAGE,
        unit: UNITS_VOLTS_DC,
        prefix: PREFIX_DECI,
        range_min: 110,
        range_max: 140,
        normal_min: 119,
        normal_max: 125,
        recorded_value_support: RECORDED_SUPPORT,
        description: "Fake Voltage",
    },
    SensorDefinition {
        kind: SENSOR_ITEMS,
        unit: UNITS_NONE,
        prefix: PREFIX_KILO,
        range_min: 0,
        range_max: 100,
        normal_min: 0,
        normal_max: 1,
        recorded_value_support: RECORDED_SUPPORT,
        description: "Fake Beta Particle Counter",
    },
];

static HANDLERS: [ParamHandler<SensorResponder>; 10] = [
    ParamHandler::get_only(pids::DEVICE_INFO, get_device_info),
    ParamHandler::get_only(pids::PRODUCT_DETAIL_ID_LIST, get_product_detail_list),
    ParamHandler::get_only(pids::DEVICE_MODEL_DESCRIPTION, get_device_model_description),
    ParamHandler::get_only(pids::MANUFACTURER_LABEL, get_manufacturer_label),
    ParamHandler::get_only(pids::DEVICE_LABEL, get_device_label),
    ParamHandler::get_only(pids::SOFTWARE_VERSION_LABEL, get_software_version_label),
    ParamHandler::get_only(pids::SENSOR_DEFINITION, get_sensor_definition),
    ParamHandler::get_set(pids::SENSOR_VALUE, get_sensor_value, set_sensor_value),
    ParamHandler::set_only(pids::RECORD_SENSORS, record_sensor),
    ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify),
];

static OPS: ResponderOps<SensorResponder> = ResponderOps::new(&HANDLERS);

pub struct SensorResponderConfig {
    pub uid: UniqueIdentifier,
}

pub struct SensorResponder {
    uid: UniqueIdentifier,
    identify_mode: bool,
    sensors: [Sensor; SENSOR_COUNT],
    rng_state: u32,
}

impl MessageCounted for SensorResponder {
    fn message_count(&self) -> u8 {
        0
    }
}

impl SensorResponder {
    pub fn new(config: SensorResponderConfig) -> Self {
        let mut responder = Self {
            uid: config.uid,
            identify_mode: false,
            sensors: SENSOR_DEFINITIONS.map(Sensor::new),
            rng_state: 1,
        };

        for index in 0..SENSOR_COUNT {
            responder.reset_sensor(index);
        }

        responder
    }

    pub fn send_rdm_request(&mut self, request: &RdmRequest) -> DispatchOutcome {
        OPS.handle_rdm_request(self, self.uid, 0, request)
    }

    fn record(&mut self, index: usize) {
        self.rng_state = self.rng_state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let state = self.rng_state;
        let definition = self.sensors[index].definition;
        self.sensors[index].record(|| Self::scaled(&definition, state));
    }

    fn reset_sensor(&mut self, index: usize) {
        self.rng_state = self.rng_state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let state = self.rng_state;
        let definition = self.sensors[index].definition;
        self.sensors[index].reset();
        self.sensors[index].fetch_value(|| Self::scaled(&definition, state));
        self.sensors[index].record(|| Self::scaled(&definition, state));
    }

    /// Stands in for a real ADC/bus read: scales an LCG output into the
    /// sensor's defined range.
    fn scaled(definition: &SensorDefinition, state: u32) -> i16 {
        let span = (definition.range_max - definition.range_min).max(1) as u32;
        definition.range_min + (state % span) as i16
    }
}

fn nack(request: &RdmRequest, reason: NackReason, message_count: u8) -> RdmResponse {
    request
        .nack_response(reason, message_count)
        .expect("dispatcher guarantees a unicast destination before invoking handlers")
}

fn get_device_info(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    let fields = DeviceInfoFields {
        device_model_id: DEVICE_MODEL_ID,
        product_category: PRODUCT_CATEGORY_TEST,
        software_version: 2,
        sub_device_count: 0,
        sensor_count: SENSOR_COUNT as u8,
    };

    helper::get_device_info_raw(request, &fields, 0, 1, 1, 0, target.message_count())
}

fn get_product_detail_list(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_product_detail_list(request, &[PRODUCT_DETAIL_TEST], target.message_count())
}

fn get_device_model_description(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "OLA Sensor Device", target.message_count())
}

fn get_manufacturer_label(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, MANUFACTURER_LABEL, target.message_count())
}

fn get_device_label(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "Sensor Device", target.message_count())
}

fn get_software_version_label(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, crate::responders::software_version_label().as_str(), target.message_count())
}

fn get_sensor_definition(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_sensor_definition(request, &target.sensors, target.message_count())
}

fn get_sensor_value(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_sensor_value(request, &target.sensors, target.message_count())
}

fn set_sensor_value(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_sensor_value(request, &target.sensors, message_count) {
        Ok(index) => {
            target.reset_sensor(index);
            helper::get_sensor_value(request, &target.sensors, message_count)
        },
        Err(response) => response,
    }
}

fn record_sensor(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::record_sensor_target(request, target.sensors.len(), message_count) {
        Ok(RecordSensorTarget::Single(index)) => {
            target.record(index);
            helper::empty_set_response(request, message_count)
        },
        Ok(RecordSensorTarget::All) => {
            for index in 0..target.sensors.len() {
                target.record(index);
            }
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_identify(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_bool_value(request, target.identify_mode, target.message_count())
}

fn set_identify(target: &mut SensorResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(state) => {
            target.identify_mode = state;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::types::ResponseType;
    use crate::unique_identifier::PackageAddress;

    fn responder() -> SensorResponder {
        SensorResponder::new(SensorResponderConfig {
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
    fn device_info_reports_three_sensors_and_zero_footprint() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::DEVICE_INFO, &[]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[10..12], &0u16.to_be_bytes());
                assert_eq!(response.param_data[18], 3);
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn sensor_definition_reports_temperature_range() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::SENSOR_DEFINITION, &[0]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.param_data[0], 0);
                assert_eq!(response.param_data[1], SENSOR_TEMPERATURE);
                assert_eq!(&response.param_data[4..6], &0i16.to_be_bytes());
                assert_eq!(&response.param_data[6..8], &100i16.to_be_bytes());
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn sensor_definition_rejects_out_of_range_index() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::SENSOR_DEFINITION, &[9]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::DataOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }

    #[test]
    fn sensor_value_stays_within_its_defined_range() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::SENSOR_VALUE, &[1]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                let value = i16::from_be_bytes([response.param_data[1], response.param_data[2]]);
                assert!((110..140).contains(&value));
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn record_sensors_broadcast_index_records_every_sensor() {
        let mut responder = responder();
        let req = request(RequestCommandClass::SetCommand, pids::RECORD_SENSORS, &[0xFF]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => assert_eq!(response.response_type, ResponseType::ResponseTypeAck),
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn identify_round_trips() {
        let mut responder = responder();
        let set_req = request(RequestCommandClass::SetCommand, pids::IDENTIFY_DEVICE, &[1]);
        responder.send_rdm_request(&set_req);

        let get_req = request(RequestCommandClass::GetCommand, pids::IDENTIFY_DEVICE, &[]);
        match responder.send_rdm_request(&get_req) {
            DispatchOutcome::Response(response) => assert_eq!(response.param_data[0], 1),
            _ => panic!("expected an ACK"),
        }
    }
}
