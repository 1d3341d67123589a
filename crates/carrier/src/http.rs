use std::time::Duration;

use shiplink_core::ShipmentNumber;

use crate::client::{
    CancelShipmentResponse, CarrierClient, CarrierFault, RegisterShipmentRequest,
    RegisterShipmentResponse,
};

/// JSON-over-HTTP carrier client for production mode.
///
/// `POST {endpoint}/shipments` registers a shipment,
/// `POST {endpoint}/shipments/{number}/cancel` voids one. Every request
/// carries the configured timeout; timeouts and transport failures both map
/// to [`CarrierFault`] so the workflow treats them uniformly.
#[derive(Debug)]
pub struct HttpCarrierClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpCarrierClient {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self { endpoint, client }
    }

    fn fault_from(err: reqwest::Error) -> CarrierFault {
        if err.is_timeout() {
            CarrierFault::Timeout
        } else {
            CarrierFault::Transport(err.to_string())
        }
    }

    fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, CarrierFault> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(CarrierFault::Rejected(format!("{status}: {body}")))
    }
}

impl CarrierClient for HttpCarrierClient {
    fn register_shipment(
        &self,
        request: &RegisterShipmentRequest,
    ) -> Result<RegisterShipmentResponse, CarrierFault> {
        let url = format!("{}/shipments", self.endpoint);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(Self::fault_from)?;

        Self::check_status(response)?
            .json::<RegisterShipmentResponse>()
            .map_err(|e| CarrierFault::Transport(format!("malformed register response: {e}")))
    }

    fn cancel_shipment(
        &self,
        shipment_number: &ShipmentNumber,
    ) -> Result<CancelShipmentResponse, CarrierFault> {
        let url = format!("{}/shipments/{}/cancel", self.endpoint, shipment_number);

        let response = self
            .client
            .post(&url)
            .send()
            .map_err(Self::fault_from)?;

        Self::check_status(response)?
            .json::<CancelShipmentResponse>()
            .map_err(|e| CarrierFault::Transport(format!("malformed cancel response: {e}")))
    }
}
