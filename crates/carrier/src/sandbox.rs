use std::sync::atomic::{AtomicU64, Ordering};

use shiplink_core::ShipmentNumber;

use crate::client::{
    CancelShipmentResponse, CarrierClient, CarrierFault, RegisterShipmentRequest,
    RegisterShipmentResponse,
};

/// Canned-response carrier client for test mode.
///
/// Issues deterministic, monotonically increasing shipment numbers so that
/// repeated registrations in a sandbox environment stay distinguishable.
/// Never fails.
#[derive(Debug)]
pub struct SandboxCarrierClient {
    next_number: AtomicU64,
}

/// First shipment number the sandbox hands out.
const FIRST_SHIPMENT_NUMBER: u64 = 911_778_899;

impl SandboxCarrierClient {
    pub fn new() -> Self {
        Self {
            next_number: AtomicU64::new(FIRST_SHIPMENT_NUMBER),
        }
    }
}

impl Default for SandboxCarrierClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CarrierClient for SandboxCarrierClient {
    fn register_shipment(
        &self,
        request: &RegisterShipmentRequest,
    ) -> Result<RegisterShipmentResponse, CarrierFault> {
        let number = self.next_number.fetch_add(1, Ordering::Relaxed);
        let shipment_number = ShipmentNumber::new(number.to_string());

        tracing::debug!(
            shipment_number = %shipment_number,
            receiver_town = %request.receiver.town,
            weight_grams = request.weight_grams,
            "sandbox carrier registered shipment"
        );

        Ok(RegisterShipmentResponse {
            label_url: format!("https://sandbox.carrier.example/labels/{shipment_number}.pdf"),
            shipment_number,
            sequence_number: 1,
            status: "shipment successfully registered".to_string(),
        })
    }

    fn cancel_shipment(
        &self,
        shipment_number: &ShipmentNumber,
    ) -> Result<CancelShipmentResponse, CarrierFault> {
        tracing::debug!(%shipment_number, "sandbox carrier cancelled shipment");

        Ok(CancelShipmentResponse {
            status: "shipment cancelled".to_string(),
        })
    }
}
