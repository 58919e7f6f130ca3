//! A footprint-less responder exposing the E1.37-2 network PIDs: DNS
//! hostname/domain/name-server lookups backed by a fixed, fake network
//! configuration (this crate has no actual network stack to query).

use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::responder_helper as helper;
use crate::responder_helper::DeviceInfoFields;
use crate::responder_ops::{DispatchOutcome, MessageCounted, ParamHandler, ResponderOps};
use crate::responders::{MANUFACTURER_LABEL, PRODUCT_CATEGORY_TEST, PRODUCT_DETAIL_TEST};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

const DEVICE_MODEL_ID: u16 = 6;
const NAME_SERVERS: [[u8; 4]; 3] = [[10, 0, 0, 1], [10, 0, 0, 2], [10, 0, 0, 3]];

static HANDLERS: [ParamHandler<NetworkResponder>; 10] = [
    ParamHandler::get_only(pids::DEVICE_INFO, get_device_info),
    ParamHandler::get_only(pids::PRODUCT_DETAIL_ID_LIST, get_product_detail_list),
    ParamHandler::get_only(pids::DEVICE_MODEL_DESCRIPTION, get_device_model_description),
    ParamHandler::get_only(pids::MANUFACTURER_LABEL, get_manufacturer_label),
    ParamHandler::get_only(pids::DEVICE_LABEL, get_device_label),
    ParamHandler::get_only(pids::SOFTWARE_VERSION_LABEL, get_software_version_label),
    ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify),
    ParamHandler::get_only(pids::DNS_HOSTNAME, get_dns_hostname),
    ParamHandler::get_only(pids::DNS_DOMAIN_NAME, get_dns_domain_name),
    ParamHandler::get_only(pids::DNS_NAME_SERVER, get_dns_name_server),
];

static OPS: ResponderOps<NetworkResponder> = ResponderOps::new(&HANDLERS);

pub struct NetworkResponderConfig {
    pub uid: UniqueIdentifier,
}

pub struct NetworkResponder {
    uid: UniqueIdentifier,
    identify_mode: bool,
}

impl MessageCounted for NetworkResponder {
    fn message_count(&self) -> u8 {
        0
    }
}

impl NetworkResponder {
    pub fn new(config: NetworkResponderConfig) -> Self {
        Self {
            uid: config.uid,
            identify_mode: false,
        }
    }

    pub fn send_rdm_request(&mut self, request: &RdmRequest) -> DispatchOutcome {
        OPS.handle_rdm_request(self, self.uid, 0, request)
    }
}

fn nack(request: &RdmRequest, reason: NackReason, message_count: u8) -> RdmResponse {
    request
        .nack_response(reason, message_count)
        .expect("dispatcher guarantees a unicast destination before invoking handlers")
}

fn get_device_info(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    let fields = DeviceInfoFields {
        device_model_id: DEVICE_MODEL_ID,
        product_category: PRODUCT_CATEGORY_TEST,
        software_version: 2,
        sub_device_count: 0,
        sensor_count: 0,
    };

    helper::get_device_info_raw(request, &fields, 0, 1, 1, 0, target.message_count())
}

fn get_product_detail_list(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_product_detail_list(request, &[PRODUCT_DETAIL_TEST], target.message_count())
}

fn get_device_model_description(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "OLA Network Device", target.message_count())
}

fn get_manufacturer_label(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, MANUFACTURER_LABEL, target.message_count())
}

fn get_device_label(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "Network Device", target.message_count())
}

fn get_software_version_label(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, crate::responders::software_version_label().as_str(), target.message_count())
}

fn get_identify(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_bool_value(request, target.identify_mode, target.message_count())
}

fn set_identify(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(state) => {
            target.identify_mode = state;
            helper::empty_set_response(request, message_count)
        },
        Err(response) => response,
    }
}

fn get_dns_hostname(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_string(request, "foo", target.message_count())
}

fn get_dns_domain_name(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    if !request.param_data.is_empty() {
        return nack(request, NackReason::FormatError, target.message_count());
    }

    helper::get_string(request, "bar.com", target.message_count())
}

/// `GetDNSNameServer` — the request carries a one-byte server index;
/// the response echoes that index followed by the server's IPv4 address.
fn get_dns_name_server(target: &mut NetworkResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let Some(index) = helper::extract_uint8(&request.param_data) else {
        return nack(request, NackReason::FormatError, message_count);
    };

    let Some(address) = NAME_SERVERS.get(index as usize) else {
        return nack(request, NackReason::DataOutOfRange, message_count);
    };

    let mut data = DataPack::new();
    data.push(index).unwrap();
    data.extend_from_slice(address).unwrap();

    request.ack_response(data, message_count).expect("dispatcher guarantees a unicast destination before invoking handlers")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::types::ResponseType;
    use crate::unique_identifier::PackageAddress;

    fn responder() -> NetworkResponder {
        NetworkResponder::new(NetworkResponderConfig {
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
    fn device_info_reports_zero_footprint() {
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
    fn dns_name_server_reports_index_and_address() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::DNS_NAME_SERVER, &[1]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.response_type, ResponseType::ResponseTypeAck);
                assert_eq!(&response.param_data[..], &[1, 10, 0, 0, 2]);
            },
            _ => panic!("expected an ACK"),
        }
    }

    #[test]
    fn dns_name_server_rejects_out_of_range_index() {
        let mut responder = responder();
        let req = request(RequestCommandClass::GetCommand, pids::DNS_NAME_SERVER, &[5]);

        match responder.send_rdm_request(&req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::DataOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }

    #[test]
    fn dns_hostname_and_domain_name_report_fixed_values() {
        let mut responder = responder();

        let host_req = request(RequestCommandClass::GetCommand, pids::DNS_HOSTNAME, &[]);
        match responder.send_rdm_request(&host_req) {
            DispatchOutcome::Response(response) => assert_eq!(&response.param_data[..], b"foo"),
            _ => panic!("expected an ACK"),
        }

        let domain_req = request(RequestCommandClass::GetCommand, pids::DNS_DOMAIN_NAME, &[]);
        match responder.send_rdm_request(&domain_req) {
            DispatchOutcome::Response(response) => assert_eq!(&response.param_data[..], b"bar.com"),
            _ => panic!("expected an ACK"),
        }
    }
}
