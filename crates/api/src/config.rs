use shiplink_carrier::{CarrierConfig, CarrierMode};
use shiplink_shipping::SenderConfig;

/// Process configuration, read from environment variables.
///
/// Every value has a working sandbox default so a bare `shiplink-api` starts
/// in test mode without touching a real carrier.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub sender: SenderConfig,
    pub carrier: CarrierConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = SenderConfig::default();
        let sender = SenderConfig {
            name: env_or("SHIPLINK_SENDER_NAME", &defaults.name),
            street: env_or("SHIPLINK_SENDER_STREET", &defaults.street),
            house_number: env_or("SHIPLINK_SENDER_NO", &defaults.house_number),
            postal_code: env_or("SHIPLINK_SENDER_POSTAL_CODE", &defaults.postal_code),
            town: env_or("SHIPLINK_SENDER_TOWN", &defaults.town),
            country_selector: std::env::var("SHIPLINK_SENDER_COUNTRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.country_selector),
        };

        let carrier_defaults = CarrierConfig::default();
        let mode = match std::env::var("SHIPLINK_CARRIER_MODE").as_deref() {
            Ok("production") => CarrierMode::Production,
            Ok("sandbox") | Err(_) => CarrierMode::Sandbox,
            Ok(other) => {
                tracing::warn!(mode = other, "unknown carrier mode, falling back to sandbox");
                CarrierMode::Sandbox
            }
        };
        let carrier = CarrierConfig {
            mode,
            endpoint: env_or("SHIPLINK_CARRIER_ENDPOINT", &carrier_defaults.endpoint),
            timeout_secs: std::env::var("SHIPLINK_CARRIER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(carrier_defaults.timeout_secs),
        };

        Self { sender, carrier }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
