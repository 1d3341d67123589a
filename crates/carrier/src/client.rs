use serde::{Deserialize, Serialize};
use thiserror::Error;

use shiplink_core::ShipmentNumber;

/// One side of a shipment: who ships or who receives.
///
/// Receiver fields come straight off the order's delivery address, unvalidated;
/// sender fields come from plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub town: String,
    pub country: String,
}

/// Request payload for registering one package with the carrier.
///
/// Dimensions are all-or-nothing: either all three are present or all three
/// are null, never a partial set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterShipmentRequest {
    pub receiver: Party,
    pub sender: Party,
    pub weight_grams: u32,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Carrier response to a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterShipmentResponse {
    pub label_url: String,
    pub shipment_number: ShipmentNumber,
    pub sequence_number: i64,
    /// Free-form, carrier-specific status line.
    pub status: String,
}

/// Carrier response to a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelShipmentResponse {
    pub status: String,
}

/// Failure of a single carrier interaction.
///
/// Policy across the workflow: log and skip the unit of work (package or
/// cancellation entry), never abort the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarrierFault {
    #[error("carrier transport error: {0}")]
    Transport(String),

    #[error("carrier request timed out")]
    Timeout,

    #[error("carrier rejected the request: {0}")]
    Rejected(String),
}

/// The carrier operations this workflow consumes.
///
/// Both calls are blocking; the workflow is sequential by design and imposes
/// timeouts at the transport layer.
pub trait CarrierClient: Send + Sync {
    fn register_shipment(
        &self,
        request: &RegisterShipmentRequest,
    ) -> Result<RegisterShipmentResponse, CarrierFault>;

    fn cancel_shipment(
        &self,
        shipment_number: &ShipmentNumber,
    ) -> Result<CancelShipmentResponse, CarrierFault>;
}
