//! `shiplink-carrier` — the carrier client seam.
//!
//! Everything the workflow knows about the shipping provider goes through
//! [`CarrierClient`]. Two implementations ship: a sandbox client with canned
//! responses for test mode, and a JSON-over-HTTP client for production. The
//! active one is chosen from configuration, never inside the workflow.

pub mod client;
pub mod http;
pub mod sandbox;

pub use client::{
    CancelShipmentResponse, CarrierClient, CarrierFault, Party, RegisterShipmentRequest,
    RegisterShipmentResponse,
};
pub use http::HttpCarrierClient;
pub use sandbox::SandboxCarrierClient;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which carrier endpoint the plugin talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarrierMode {
    Sandbox,
    Production,
}

/// Carrier connection settings, read from plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierConfig {
    pub mode: CarrierMode,
    pub endpoint: String,
    /// Per-request timeout in seconds; a timeout is reported as a
    /// [`CarrierFault`], same as any other transport failure.
    pub timeout_secs: u64,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            mode: CarrierMode::Sandbox,
            endpoint: "https://api.carrier.example/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

impl CarrierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Build the carrier client matching the configured mode.
pub fn client_for(config: &CarrierConfig) -> Arc<dyn CarrierClient> {
    match config.mode {
        CarrierMode::Sandbox => Arc::new(SandboxCarrierClient::new()),
        CarrierMode::Production => Arc::new(HttpCarrierClient::new(
            config.endpoint.clone(),
            config.timeout(),
        )),
    }
}
