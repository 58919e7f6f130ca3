//! Concrete responder state models. Each submodule owns one responder
//! type's mutable state, its static [`crate::responder_ops::ParamHandler`]
//! table, and a `send_rdm_request` façade delegating to that table's
//! [`crate::responder_ops::ResponderOps`] singleton.

pub mod ack_timer_responder;
pub mod advanced_dimmer_responder;
pub mod dimmer_root_device;
pub mod dimmer_sub_device;
pub mod moving_light_responder;
pub mod network_responder;
pub mod sensor_responder;

/// Manufacturer label shared by every responder in this crate.
pub(crate) const MANUFACTURER_LABEL: &str = "Open Lighting Project";

/// RDM's "test" product category, used by every responder here since none
/// represent a shipping product line.
pub(crate) const PRODUCT_CATEGORY_TEST: u16 = 0x7FFF;

/// E1.20 `PRODUCT_CATEGORY_FIXTURE_DIMMER`.
pub(crate) const PRODUCT_CATEGORY_DIMMER: u16 = 0x0100;

/// E1.20 `PRODUCT_DETAIL_TEST`, the sole entry every dimmer in this crate
/// reports from `PRODUCT_DETAIL_ID_LIST`.
pub(crate) const PRODUCT_DETAIL_TEST: u16 = 0x0000;

/// `"vX.Y.Z"`, built from this crate's own version at compile time.
pub(crate) fn software_version_label() -> heapless::String<32> {
    use core::fmt::Write;
    let mut label = heapless::String::new();
    let _ = write!(label, "v{}", env!("CARGO_PKG_VERSION"));
    label
}
