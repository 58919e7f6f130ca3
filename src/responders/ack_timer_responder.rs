//! A responder that `ACK_TIMER`s `PID_DMX_START_ADDRESS` and
//! `PID_IDENTIFY_DEVICE` sets, to exercise the queued-message subsystem.

use crate::ack_timer::{AckQueue, STATUS_GET_LAST_MESSAGE};
use crate::command_class::ResponseCommandClass;
use crate::consts::ACK_TIMER_MS;
use crate::personality::{Personality, PersonalityCollection, PersonalityManager};
use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::responder_helper as helper;
use crate::responder_helper::DeviceInfoFields;
use crate::responder_ops::{DispatchOutcome, MessageCounted, ParamHandler, ResponderOps};
use crate::responders::{software_version_label, MANUFACTURER_LABEL, PRODUCT_CATEGORY_TEST};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

const DEVICE_MODEL_ID: u16 = 0x0001;

static PERSONALITIES: [Personality; 4] = [
    Personality::new(0, "Personality 1"),
    Personality::new(5, "Personality 2"),
    Personality::new(10, "Personality 3"),
    Personality::new(20, "Personality 4"),
];
static PERSONALITY_COLLECTION: PersonalityCollection = PersonalityCollection::new(&PERSONALITIES);

static HANDLERS: [ParamHandler<AckTimerResponder>; 11] = [
    ParamHandler::get_only(pids::QUEUED_MESSAGE, get_queued_message),
    ParamHandler::get_only(pids::STATUS_MESSAGES, get_status_messages),
    ParamHandler::get_only(pids::DEVICE_INFO, get_device_info),
    ParamHandler::get_only(pids::DEVICE_MODEL_DESCRIPTION, get_device_model_description),
    ParamHandler::get_only(pids::MANUFACTURER_LABEL, get_manufacturer_label),
    ParamHandler::get_only(pids::DEVICE_LABEL, get_device_label),
    ParamHandler::get_only(pids::SOFTWARE_VERSION_LABEL, get_software_version_label),
    ParamHandler::get_set(pids::DMX_PERSONALITY, get_personality, set_personality),
    ParamHandler::get_only(pids::DMX_PERSONALITY_DESCRIPTION, get_personality_description),
    ParamHandler::get_set(pids::DMX_START_ADDRESS, get_dmx_start_address, set_dmx_start_address),
    ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify),
];

static OPS: ResponderOps<AckTimerResponder> = ResponderOps::new(&HANDLERS);

pub struct AckTimerResponderConfig {
    pub uid: UniqueIdentifier,
}

/// ACK_TIMER defers two responses deep: a start-address set and an identify
/// set can each be pending at once.
const PENDING_CAPACITY: usize = 2;

pub struct AckTimerResponder {
    uid: UniqueIdentifier,
    start_address: u16,
    identify_mode: bool,
    personality_manager: PersonalityManager,
    queue: AckQueue<PENDING_CAPACITY>,
    /// Stashed for the duration of one dispatch so deferred SET handlers can
    /// compute `valid_after` without reaching for a system clock themselves.
    now_ms: u64,
}

impl MessageCounted for AckTimerResponder {
    fn message_count(&self) -> u8 {
        self.queue.message_count()
    }
}

impl AckTimerResponder {
    pub fn new(config: AckTimerResponderConfig) -> Self {
        Self {
            uid: config.uid,
            start_address: 1,
            identify_mode: false,
            personality_manager: PersonalityManager::new(&PERSONALITY_COLLECTION, 1),
            queue: AckQueue::new(),
            now_ms: 0,
        }
    }

    /// Migrates any now-valid upcoming queued messages, then dispatches
    /// `request` against this responder's own UID and root sub-device.
    pub fn send_rdm_request(&mut self, request: &RdmRequest, now_ms: u64) -> DispatchOutcome {
        self.queue.migrate(now_ms);
        self.now_ms = now_ms;
        OPS.handle_rdm_request(self, self.uid, 0, request)
    }

    fn footprint(&self) -> u16 {
        self.personality_manager.active_footprint()
    }

    fn defer(&mut self, request: &RdmRequest, pid: u16) -> RdmResponse {
        let valid_after = self.now_ms + ACK_TIMER_MS;
        self.queue.enqueue(
            valid_after,
            pid,
            ResponseCommandClass::SetCommandResponse,
            DataPack::new(),
        );

        let ack_time = 1 + (ACK_TIMER_MS / 100) as u16;
        request
            .ack_timer_response(ack_time, self.message_count())
            .expect("dispatcher guarantees a unicast destination before invoking handlers")
    }
}

fn get_queued_message(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    let Some(status_type) = helper::extract_uint8(&request.param_data) else {
        return request
            .nack_response(NackReason::FormatError, target.message_count())
            .unwrap();
    };

    match target.queue.take(request, status_type) {
        Some(response) => response,
        None => empty_status_message(target, request),
    }
}

/// Mirrors `EmptyStatusMessage`: an empty ACK whose PID is
/// `PID_STATUS_MESSAGES`, not the PID that was actually requested.
fn empty_status_message(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    request
        .queued_message_response(
            request.command_class.get_response_class(),
            pids::STATUS_MESSAGES,
            DataPack::new(),
            target.message_count(),
        )
        .expect("dispatcher guarantees a unicast destination before invoking handlers")
}

fn get_status_messages(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::empty_get_response(request, target.message_count())
}

fn get_device_info(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    let fields = DeviceInfoFields {
        device_model_id: DEVICE_MODEL_ID,
        product_category: PRODUCT_CATEGORY_TEST,
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

fn get_device_model_description(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "OLA Ack Timer Responder", target.message_count())
}

fn get_manufacturer_label(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, MANUFACTURER_LABEL, target.message_count())
}

fn get_device_label(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, "Ack Timer Responder", target.message_count())
}

fn get_software_version_label(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_string(request, software_version_label().as_str(), target.message_count())
}

fn get_personality(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_personality(request, &target.personality_manager, target.message_count())
}

fn set_personality(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let start_address = target.start_address;
    helper::set_personality(request, &mut target.personality_manager, start_address, message_count)
}

fn get_personality_description(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_personality_description(request, &target.personality_manager, target.message_count())
}

fn get_dmx_start_address(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_dmx_address(
        request,
        target.footprint(),
        target.start_address,
        target.message_count(),
    )
}

fn set_dmx_start_address(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    let footprint = target.footprint();
    match helper::set_dmx_address(request, footprint, message_count) {
        Ok(address) => {
            target.start_address = address;
            target.defer(request, pids::DMX_START_ADDRESS)
        },
        Err(nack) => nack,
    }
}

fn get_identify(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    helper::get_bool_value(request, target.identify_mode, target.message_count())
}

fn set_identify(target: &mut AckTimerResponder, request: &RdmRequest) -> RdmResponse {
    let message_count = target.message_count();
    match helper::set_bool_value(request, message_count) {
        Ok(identify) => {
            target.identify_mode = identify;
            target.defer(request, pids::IDENTIFY_DEVICE)
        },
        Err(nack) => nack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::types::ResponseType;
    use crate::unique_identifier::PackageAddress;

    fn responder() -> AckTimerResponder {
        AckTimerResponder::new(AckTimerResponderConfig {
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
    fn set_identify_ack_timers_then_drains_to_queued_message() {
        let mut responder = responder();

        let set_req = request(RequestCommandClass::SetCommand, pids::IDENTIFY_DEVICE, &[0x01]);
        match responder.send_rdm_request(&set_req, 0) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.response_type, ResponseType::ResponseTypeAckTimer);
                assert_eq!(&response.param_data[..], &[0x00, 0x05]);
            },
            _ => panic!("expected an ACK_TIMER response"),
        }
        assert!(responder.identify_mode);

        let drain_req = request(RequestCommandClass::GetCommand, pids::QUEUED_MESSAGE, &[0x02]);
        match responder.send_rdm_request(&drain_req, 0) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.param_id, pids::STATUS_MESSAGES);
                assert!(response.param_data.is_empty());
            },
            _ => panic!("expected an empty status message"),
        }

        match responder.send_rdm_request(&drain_req, ACK_TIMER_MS) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.param_id, pids::IDENTIFY_DEVICE);
                assert!(response.param_data.is_empty());
            },
            _ => panic!("expected the deferred identify response"),
        }
    }

    #[test]
    fn status_get_last_message_repeats_after_drain() {
        let mut responder = responder();
        let set_req = request(RequestCommandClass::SetCommand, pids::IDENTIFY_DEVICE, &[0x01]);
        responder.send_rdm_request(&set_req, 0);

        let drain_req = request(RequestCommandClass::GetCommand, pids::QUEUED_MESSAGE, &[0x00]);
        responder.send_rdm_request(&drain_req, ACK_TIMER_MS);

        let reread_req = request(
            RequestCommandClass::GetCommand,
            pids::QUEUED_MESSAGE,
            &[STATUS_GET_LAST_MESSAGE],
        );
        match responder.send_rdm_request(&reread_req, ACK_TIMER_MS) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.param_id, pids::IDENTIFY_DEVICE);
            },
            _ => panic!("expected the retained last queued message"),
        }
    }

    #[test]
    fn set_dmx_start_address_rejects_out_of_range() {
        let mut responder = responder();
        let req = request(
            RequestCommandClass::SetCommand,
            pids::DMX_START_ADDRESS,
            &504u16.to_be_bytes(),
        );

        match responder.send_rdm_request(&req, 0) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.response_type, ResponseType::ResponseTypeNackReason);
            },
            _ => panic!("expected a NACK"),
        }
    }

    #[test]
    fn set_personality_out_of_range_is_nacked() {
        let mut responder = responder();
        let req = request(RequestCommandClass::SetCommand, pids::DMX_PERSONALITY, &[5]);

        match responder.send_rdm_request(&req, 0) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &(NackReason::DataOutOfRange as u16).to_be_bytes());
            },
            _ => panic!("expected a NACK"),
        }
    }
}
