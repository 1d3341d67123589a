//! `shiplink-shipping` — shipment-side domain owned by the plugin.
//!
//! Covers the state this workflow persists (shipment records and their
//! status), the per-order result payload returned to the host platform,
//! order-id input normalization and the sender configuration.

pub mod config;
pub mod input;
pub mod record;
pub mod result;

pub use config::SenderConfig;
pub use input::OrderIdsInput;
pub use record::{ShipmentItem, ShipmentRecord, ShippingStatus, SHIPPING_SERVICE_PROVIDER};
pub use result::OrderResult;
