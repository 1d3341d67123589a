use serde::{Deserialize, Serialize};

use crate::record::ShipmentItem;

/// Per-order outcome returned to the host platform.
///
/// The `newPackagenumber` wire spelling is part of the platform contract and
/// is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    pub success: bool,
    pub message: String,
    #[serde(rename = "newPackagenumber")]
    pub new_package_number: bool,
    pub packages: Option<Vec<ShipmentItem>>,
}

impl OrderResult {
    /// Outcome of a successful registration: carries every package item
    /// registered for the order in this invocation.
    pub fn registered(status: &str, packages: Vec<ShipmentItem>) -> Self {
        Self {
            success: true,
            message: status_message(status),
            new_package_number: false,
            packages: Some(packages),
        }
    }

    /// Outcome of a successful cancellation. No package payload.
    pub fn cancelled(status: &str) -> Self {
        Self {
            success: true,
            message: status_message(status),
            new_package_number: false,
            packages: None,
        }
    }
}

/// Format a carrier status into the message shown in the platform backend.
fn status_message(status: &str) -> String {
    format!("Code: {status}")
}
