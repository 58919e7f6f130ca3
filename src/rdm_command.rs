use crate::command_class::{RequestCommandClass, ResponseCommandClass};
use crate::types::{DataPack, NackReason, ResponseType};
use crate::unique_identifier::{PackageAddress, UniqueIdentifier};

/// A decoded RDM request, independent of how it arrived over the wire.
///
/// The byte-level RDM frame (checksum, preamble, start codes) is the
/// concern of the transport that hands requests to this crate; this type
/// only carries the fields a responder actually acts on.
#[derive(Debug, Clone)]
pub struct RdmRequest {
    pub source_uid: UniqueIdentifier,
    pub destination_uid: PackageAddress,
    pub transaction_number: u8,
    pub port_id: u8,
    pub sub_device: u16,
    pub command_class: RequestCommandClass,
    pub param_id: u16,
    pub param_data: DataPack,
}

/// A decoded RDM response.
#[derive(Debug, Clone)]
pub struct RdmResponse {
    pub source_uid: UniqueIdentifier,
    pub destination_uid: PackageAddress,
    pub transaction_number: u8,
    pub response_type: ResponseType,
    pub message_count: u8,
    pub sub_device: u16,
    pub command_class: ResponseCommandClass,
    pub param_id: u16,
    pub param_data: DataPack,
}

/// Returned when building a response for a request whose destination is a
/// broadcast address — there is no single unicast source to reply to.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IsBroadcastError;

impl core::fmt::Display for IsBroadcastError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "tried to build a response for a broadcast request")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IsBroadcastError {}

impl RdmRequest {
    /// Builds a `GET_COMMAND_RESPONSE` / `SET_COMMAND_RESPONSE` carrying
    /// `data` as an ACK, mirroring transaction number, sub-device and PID.
    /// This is the `GetResponseFromData` helper.
    pub fn ack_response(
        &self,
        data: DataPack,
        message_count: u8,
    ) -> Result<RdmResponse, IsBroadcastError> {
        self.build_response(
            self.command_class.get_response_class(),
            ResponseType::ResponseTypeAck,
            data,
            message_count,
        )
    }

    /// Builds an `ACK_TIMER` response whose payload is the big-endian
    /// tenths-of-a-second the controller should wait.
    pub fn ack_timer_response(
        &self,
        tenths_of_second: u16,
        message_count: u8,
    ) -> Result<RdmResponse, IsBroadcastError> {
        let data = DataPack::from_slice(&tenths_of_second.to_be_bytes()).unwrap();
        self.build_response(
            self.command_class.get_response_class(),
            ResponseType::ResponseTypeAckTimer,
            data,
            message_count,
        )
    }

    /// Builds a NACK response carrying `reason` as a big-endian uint16
    /// payload. This is the `NackWithReason` helper.
    pub fn nack_response(
        &self,
        reason: NackReason,
        message_count: u8,
    ) -> Result<RdmResponse, IsBroadcastError> {
        self.build_response(
            self.command_class.get_response_class(),
            ResponseType::ResponseTypeNackReason,
            reason.serialize(),
            message_count,
        )
    }

    /// Builds a response carrying a message popped from an AckTimer queue.
    /// Unlike [`RdmRequest::ack_response`], the response's command class is
    /// whatever class the original, now-queued command used, not this
    /// request's own command class (this request is the `PID_QUEUED_MESSAGE`
    /// GET that is draining the queue).
    pub fn queued_message_response(
        &self,
        command_class: ResponseCommandClass,
        param_id: u16,
        data: DataPack,
        message_count: u8,
    ) -> Result<RdmResponse, IsBroadcastError> {
        let mut response = self.build_response(
            command_class,
            ResponseType::ResponseTypeAck,
            data,
            message_count,
        )?;
        response.param_id = param_id;
        Ok(response)
    }

    fn build_response(
        &self,
        command_class: ResponseCommandClass,
        response_type: ResponseType,
        data: DataPack,
        message_count: u8,
    ) -> Result<RdmResponse, IsBroadcastError> {
        let source_uid = match self.destination_uid {
            PackageAddress::Device(uid) => uid,
            _ => return Err(IsBroadcastError),
        };

        Ok(RdmResponse {
            source_uid,
            destination_uid: PackageAddress::Device(self.source_uid),
            transaction_number: self.transaction_number,
            response_type,
            message_count,
            sub_device: self.sub_device,
            command_class,
            param_id: self.param_id,
            param_data: data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(destination: PackageAddress) -> RdmRequest {
        RdmRequest {
            source_uid: UniqueIdentifier::new(0x7a70, 1).unwrap(),
            destination_uid: destination,
            transaction_number: 7,
            port_id: 1,
            sub_device: 0,
            command_class: RequestCommandClass::GetCommand,
            param_id: 0x0060,
            param_data: DataPack::new(),
        }
    }

    #[test]
    fn ack_response_inverts_source_and_destination() {
        let target = UniqueIdentifier::new(0x7a70, 2).unwrap();
        let request = sample_request(PackageAddress::Device(target));

        let response = request.ack_response(DataPack::new(), 0).unwrap();

        assert_eq!(response.source_uid, target);
        assert_eq!(response.destination_uid, PackageAddress::Device(request.source_uid));
        assert_eq!(response.transaction_number, request.transaction_number);
        assert_eq!(
            response.command_class,
            ResponseCommandClass::GetCommandResponse
        );
    }

    #[test]
    fn broadcast_destination_cannot_build_response() {
        let request = sample_request(PackageAddress::Broadcast);
        request.ack_response(DataPack::new(), 0).unwrap_err();
    }

    #[test]
    fn nack_response_carries_reason_code() {
        let target = UniqueIdentifier::new(0x7a70, 2).unwrap();
        let request = sample_request(PackageAddress::Device(target));

        let response = request
            .nack_response(NackReason::UnknownPid, 0)
            .unwrap();

        assert_eq!(response.response_type, ResponseType::ResponseTypeNackReason);
        assert_eq!(&response.param_data[..], &[0x00, 0x00]);
    }
}
