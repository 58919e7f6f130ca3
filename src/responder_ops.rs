//! Generic PID-keyed dispatcher shared by every responder in this crate.
//!
//! Mirrors the shape of `ResponderOps<Target>`: a `&'static` table mapping
//! a PID to a get/set function pair, plus the filtering and NACK synthesis
//! that's identical across responder types. A responder provides the table
//! and a way to report its own current queue depth; everything else — UID
//! matching, sub-device routing, `PID_SUPPORTED_PARAMETERS`, unknown-PID
//! and command-class NACKs, broadcast suppression — lives here once.

use crate::command_class::RequestCommandClass;
use crate::consts::{ROOT_RDM_DEVICE, SUB_DEVICE_ALL_CALL};
use crate::pids;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::types::{DataPack, NackReason};
use crate::unique_identifier::UniqueIdentifier;

/// PIDs every responder answers the same way and that never appear in a
/// `PID_SUPPORTED_PARAMETERS` listing (per E1.20, §4.3 of the original
/// ResponderHelper contract).
const ALWAYS_SUPPORTED_PIDS: [u16; 3] = [
    pids::QUEUED_MESSAGE,
    pids::SUPPORTED_PARAMETERS,
    pids::STATUS_MESSAGES,
];

/// One entry in a responder's static dispatch table. `get`/`set` are
/// `None` for command classes the PID doesn't support.
pub struct ParamHandler<T> {
    pub pid: u16,
    pub get: Option<fn(&mut T, &RdmRequest) -> RdmResponse>,
    pub set: Option<fn(&mut T, &RdmRequest) -> RdmResponse>,
}

impl<T> ParamHandler<T> {
    pub const fn get_only(pid: u16, get: fn(&mut T, &RdmRequest) -> RdmResponse) -> Self {
        Self {
            pid,
            get: Some(get),
            set: None,
        }
    }

    pub const fn get_set(
        pid: u16,
        get: fn(&mut T, &RdmRequest) -> RdmResponse,
        set: fn(&mut T, &RdmRequest) -> RdmResponse,
    ) -> Self {
        Self {
            pid,
            get: Some(get),
            set: Some(set),
        }
    }

    pub const fn set_only(pid: u16, set: fn(&mut T, &RdmRequest) -> RdmResponse) -> Self {
        Self {
            pid,
            get: None,
            set: Some(set),
        }
    }
}

/// Implemented by every responder so the dispatcher can fill in
/// `message_count` on the NACKs/overflow responses it synthesizes itself
/// (a responder's own handlers fill it in on their own ACKs).
pub trait MessageCounted {
    fn message_count(&self) -> u8;
}

/// What happened to a dispatched request, mirroring the transport contract
/// in §6.1: at most one of these, and exactly once per request.
pub enum DispatchOutcome {
    /// Send `0` back over the wire.
    Response(RdmResponse),
    /// The destination didn't address this responder at all.
    Timeout,
    /// The destination was a broadcast (global or manufacturer-scoped) this
    /// responder claims; no response is ever sent for one.
    WasBroadcast,
    /// A DISC_* PID arrived; this crate implements no discovery algorithm.
    DiscoveryNotSupported,
}

/// A process-wide, per-responder-class dispatch table.
pub struct ResponderOps<T> {
    handlers: &'static [ParamHandler<T>],
}

impl<T: MessageCounted> ResponderOps<T> {
    pub const fn new(handlers: &'static [ParamHandler<T>]) -> Self {
        Self { handlers }
    }

    /// Runs the 8-step dispatch algorithm against `request`, addressed to
    /// `uid` on `own_sub_device` (`0` for a root device, otherwise this
    /// sub-device's own number).
    pub fn handle_rdm_request(
        &self,
        target: &mut T,
        uid: UniqueIdentifier,
        own_sub_device: u16,
        request: &RdmRequest,
    ) -> DispatchOutcome {
        if request.command_class == RequestCommandClass::DiscoveryCommand {
            return DispatchOutcome::DiscoveryNotSupported;
        }

        let addressed_to_us = match request.destination_uid {
            crate::unique_identifier::PackageAddress::Device(destination) => destination == uid,
            crate::unique_identifier::PackageAddress::ManufacturerBroadcast(manufacturer) => {
                manufacturer == uid.manufacturer_uid()
            },
            crate::unique_identifier::PackageAddress::Broadcast => true,
        };

        if !addressed_to_us {
            return DispatchOutcome::Timeout;
        }

        // Broadcast requests never reach a handler or produce a response;
        // see DESIGN.md for why this runs before sub-device/PID checks.
        if request.destination_uid.is_broadcast() {
            return DispatchOutcome::WasBroadcast;
        }

        if request.sub_device != ROOT_RDM_DEVICE
            && request.sub_device != own_sub_device
            && request.sub_device != SUB_DEVICE_ALL_CALL
        {
            return DispatchOutcome::Response(
                request
                    .nack_response(NackReason::SubDeviceOutOfRange, target.message_count())
                    .expect("non-broadcast destination confirmed above"),
            );
        }

        if request.param_id == pids::SUPPORTED_PARAMETERS {
            return DispatchOutcome::Response(match request.command_class {
                RequestCommandClass::GetCommand => self.supported_parameters_response(target, request),
                _ => request
                    .nack_response(NackReason::UnsupportedCommandClass, target.message_count())
                    .expect("non-broadcast destination confirmed above"),
            });
        }

        let Some(handler) = self.handlers.iter().find(|handler| handler.pid == request.param_id)
        else {
            return DispatchOutcome::Response(
                request
                    .nack_response(NackReason::UnknownPid, target.message_count())
                    .expect("non-broadcast destination confirmed above"),
            );
        };

        let handler_fn = match request.command_class {
            RequestCommandClass::GetCommand => handler.get,
            RequestCommandClass::SetCommand => handler.set,
            RequestCommandClass::DiscoveryCommand => unreachable!("filtered above"),
        };

        match handler_fn {
            Some(handler_fn) => DispatchOutcome::Response(handler_fn(target, request)),
            None => DispatchOutcome::Response(
                request
                    .nack_response(NackReason::UnsupportedCommandClass, target.message_count())
                    .expect("non-broadcast destination confirmed above"),
            ),
        }
    }

    fn supported_parameters_response(&self, target: &mut T, request: &RdmRequest) -> RdmResponse {
        let mut data = DataPack::new();

        for pid in self
            .handlers
            .iter()
            .map(|handler| handler.pid)
            .filter(|pid| !ALWAYS_SUPPORTED_PIDS.contains(pid))
        {
            // Every responder in this crate supports well under the ~115
            // PIDs that fit in one response; multi-response pagination
            // (RDM_ACK_OVERFLOW) is not implemented.
            data.extend_from_slice(&pid.to_be_bytes()).unwrap();
        }

        request
            .ack_response(data, target.message_count())
            .expect("non-broadcast destination confirmed above")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponseType;
    use crate::unique_identifier::PackageAddress;

    struct Dummy {
        label: heapless::String<32>,
    }

    impl MessageCounted for Dummy {
        fn message_count(&self) -> u8 {
            0
        }
    }

    fn get_label(target: &mut Dummy, request: &RdmRequest) -> RdmResponse {
        request
            .ack_response(DataPack::from_slice(target.label.as_bytes()).unwrap(), 0)
            .unwrap()
    }

    fn set_label(target: &mut Dummy, request: &RdmRequest) -> RdmResponse {
        target.label = heapless::String::new();
        for &byte in request.param_data.iter() {
            target.label.push(byte as char).unwrap();
        }
        request.ack_response(DataPack::new(), 0).unwrap()
    }

    static HANDLERS: [ParamHandler<Dummy>; 1] =
        [ParamHandler::get_set(pids::DEVICE_LABEL, get_label, set_label)];
    static OPS: ResponderOps<Dummy> = ResponderOps::new(&HANDLERS);

    fn uid() -> UniqueIdentifier {
        UniqueIdentifier::new(0x7a70, 1).unwrap()
    }

    fn request(
        destination: PackageAddress,
        command_class: RequestCommandClass,
        param_id: u16,
        param_data: &[u8],
    ) -> RdmRequest {
        RdmRequest {
            source_uid: UniqueIdentifier::new(0x7a70, 9).unwrap(),
            destination_uid: destination,
            transaction_number: 1,
            port_id: 1,
            sub_device: 0,
            command_class,
            param_id,
            param_data: DataPack::from_slice(param_data).unwrap(),
        }
    }

    #[test]
    fn unknown_pid_is_nacked() {
        let mut target = Dummy { label: heapless::String::new() };
        let req = request(PackageAddress::Device(uid()), RequestCommandClass::GetCommand, 0x1234, &[]);

        match OPS.handle_rdm_request(&mut target, uid(), 0, &req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(response.response_type, ResponseType::ResponseTypeNackReason);
                assert_eq!(&response.param_data[..], &[0x00, 0x00]);
            },
            _ => panic!("expected a NACK response"),
        }
    }

    #[test]
    fn mismatched_destination_times_out() {
        let mut target = Dummy { label: heapless::String::new() };
        let other = UniqueIdentifier::new(0x7a70, 2).unwrap();
        let req = request(PackageAddress::Device(other), RequestCommandClass::GetCommand, pids::DEVICE_LABEL, &[]);

        assert!(matches!(
            OPS.handle_rdm_request(&mut target, uid(), 0, &req),
            DispatchOutcome::Timeout
        ));
    }

    #[test]
    fn broadcast_set_never_invokes_the_handler() {
        let mut target = Dummy { label: heapless::String::new() };
        let req = request(PackageAddress::Broadcast, RequestCommandClass::SetCommand, pids::DEVICE_LABEL, b"changed");

        assert!(matches!(
            OPS.handle_rdm_request(&mut target, uid(), 0, &req),
            DispatchOutcome::WasBroadcast
        ));
        assert!(target.label.is_empty());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut target = Dummy { label: heapless::String::new() };
        let set_req = request(PackageAddress::Device(uid()), RequestCommandClass::SetCommand, pids::DEVICE_LABEL, b"hello");
        OPS.handle_rdm_request(&mut target, uid(), 0, &set_req);

        let get_req = request(PackageAddress::Device(uid()), RequestCommandClass::GetCommand, pids::DEVICE_LABEL, &[]);
        match OPS.handle_rdm_request(&mut target, uid(), 0, &get_req) {
            DispatchOutcome::Response(response) => assert_eq!(&response.param_data[..], b"hello"),
            _ => panic!("expected an ACK response"),
        }
    }

    #[test]
    fn supported_parameters_excludes_always_present_pids() {
        let mut target = Dummy { label: heapless::String::new() };
        let req = request(
            PackageAddress::Device(uid()),
            RequestCommandClass::GetCommand,
            pids::SUPPORTED_PARAMETERS,
            &[],
        );

        match OPS.handle_rdm_request(&mut target, uid(), 0, &req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &pids::DEVICE_LABEL.to_be_bytes());
            },
            _ => panic!("expected an ACK response"),
        }
    }

    #[test]
    fn sub_device_out_of_range_is_nacked() {
        let mut target = Dummy { label: heapless::String::new() };
        let mut req = request(PackageAddress::Device(uid()), RequestCommandClass::GetCommand, pids::DEVICE_LABEL, &[]);
        req.sub_device = 7;

        match OPS.handle_rdm_request(&mut target, uid(), 0, &req) {
            DispatchOutcome::Response(response) => {
                assert_eq!(&response.param_data[..], &[0x00, 0x09]);
            },
            _ => panic!("expected a NACK response"),
        }
    }
}
