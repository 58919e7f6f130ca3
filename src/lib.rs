//! RDM (ANSI E1.20) responder framework: a generic PID-keyed dispatcher plus
//! per-PID device state models for DMX512 responders. This library features
//! no-std as well as no-alloc support (no heap allocation) to target
//! embedded as well as os platforms.
//!
//! Please refer to the [official specifications](https://tsp.esta.org/) published by the ESTA.
//!
//! <div class="warning">This library is wip, it has not yet received extensive testing and the api
//! might not be final.</div>
//!
//! # Usage
//!
//! A responder owns its own state and a `&'static` [`responder_ops::ParamHandler`]
//! table; [`responder_ops::ResponderOps`] does the UID/sub-device filtering,
//! `PID_SUPPORTED_PARAMETERS` synthesis and NACK routing common to every
//! responder type. [`responders`] has concrete examples (a plain dimmer, a
//! moving light, a sensor array, a network interface); sketching a new one
//! means providing a state struct, a handler table, and a `send_rdm_request`
//! façade like this:
//!
//! ```rust
//! use dmx_rdm::pids;
//! use dmx_rdm::rdm_command::{RdmRequest, RdmResponse};
//! use dmx_rdm::responder_helper as helper;
//! use dmx_rdm::responder_ops::{DispatchOutcome, MessageCounted, ParamHandler, ResponderOps};
//! use dmx_rdm::unique_identifier::UniqueIdentifier;
//!
//! struct ToggleResponder {
//!     uid: UniqueIdentifier,
//!     identify_mode: bool,
//! }
//!
//! impl MessageCounted for ToggleResponder {
//!     fn message_count(&self) -> u8 {
//!         0
//!     }
//! }
//!
//! fn get_identify(target: &mut ToggleResponder, request: &RdmRequest) -> RdmResponse {
//!     helper::get_bool_value(request, target.identify_mode, target.message_count())
//! }
//!
//! fn set_identify(target: &mut ToggleResponder, request: &RdmRequest) -> RdmResponse {
//!     match helper::set_bool_value(request, target.message_count()) {
//!         Ok(state) => {
//!             target.identify_mode = state;
//!             helper::empty_set_response(request, target.message_count())
//!         },
//!         Err(response) => response,
//!     }
//! }
//!
//! static HANDLERS: [ParamHandler<ToggleResponder>; 1] =
//!     [ParamHandler::get_set(pids::IDENTIFY_DEVICE, get_identify, set_identify)];
//! static OPS: ResponderOps<ToggleResponder> = ResponderOps::new(&HANDLERS);
//!
//! impl ToggleResponder {
//!     fn send_rdm_request(&mut self, request: &RdmRequest) -> DispatchOutcome {
//!         OPS.handle_rdm_request(self, self.uid, 0, request)
//!     }
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ack_timer;
pub mod command_class;
pub mod consts;
mod layouts;
pub mod personality;
pub mod pids;
pub mod rdm_command;
/// Responder-side parameter dispatch: the generic [`responder_ops`] engine,
/// the shared [`responder_helper`] routines it calls into, and the concrete
/// device models under [`responders`].
pub mod responder_helper;
pub mod responder_ops;
pub mod responders;
pub mod sensor;
pub mod settings;
pub mod types;
pub mod unique_identifier;
