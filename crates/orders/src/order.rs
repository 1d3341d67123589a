use serde::{Deserialize, Serialize};

use shiplink_core::OrderId;

/// Delivery address of an order, as the host platform stores it.
///
/// Fields are passed through to the carrier as-is; the platform is the
/// authority on address validity, so no validation happens here. Empty
/// strings are legal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub town: String,
    pub country: String,
}

impl DeliveryAddress {
    /// Receiver display name in the form the carrier expects.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Read-only view of a platform order: its id and where it ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub delivery_address: DeliveryAddress,
}
