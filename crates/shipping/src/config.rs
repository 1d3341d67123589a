use serde::{Deserialize, Serialize};

/// Sender (shipper) address used for every carrier registration.
///
/// Static configuration injected by the host; the workflow never derives
/// sender data from orders. The country is a binary selector in the platform
/// config UI: `0` ships from Germany, anything else from Austria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderConfig {
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub town: String,
    pub country_selector: u8,
}

impl SenderConfig {
    /// Country name the carrier receives, resolved from the selector.
    pub fn country(&self) -> &'static str {
        if self.country_selector == 0 {
            "Germany"
        } else {
            "Austria"
        }
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            name: "Shiplink Warehouse".to_string(),
            street: "Lagerstrasse".to_string(),
            house_number: "15".to_string(),
            postal_code: "34117".to_string(),
            town: "Kassel".to_string(),
            country_selector: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_zero_is_germany() {
        let config = SenderConfig::default();
        assert_eq!(config.country(), "Germany");
    }

    #[test]
    fn any_other_selector_is_austria() {
        let config = SenderConfig {
            country_selector: 1,
            ..SenderConfig::default()
        };
        assert_eq!(config.country(), "Austria");

        let config = SenderConfig {
            country_selector: 200,
            ..SenderConfig::default()
        };
        assert_eq!(config.country(), "Austria");
    }
}
