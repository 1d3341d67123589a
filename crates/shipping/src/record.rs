use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use shiplink_core::{OrderId, ShipmentNumber};

/// Value written into the `shippingServiceProvider` field of every record
/// this plugin persists. Doubles as the blob-store namespace.
pub const SHIPPING_SERVICE_PROVIDER: &str = "shiplink";

/// Shipping status of an order as tracked by the plugin.
///
/// Absence of a shipment record is equivalent to `Open`. Cancellation resets
/// a record back to `Open` rather than deleting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingStatus {
    Open,
    Registered,
}

/// One registered package: the carrier label URL and the shipment number it
/// was issued under. Stored in the record's `additionalData` and echoed back
/// to the caller inside [`crate::OrderResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentItem {
    pub label_url: String,
    pub shipment_number: ShipmentNumber,
}

/// The persisted shipment state of one order, keyed by `orderId`.
///
/// Serialized flat with the field names the host platform's repository
/// expects (`transactionId` is the comma-joined shipment numbers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub order_id: OrderId,
    pub transaction_id: String,
    pub shipping_service_provider: String,
    pub shipping_status: ShippingStatus,
    pub shipping_costs: f64,
    pub additional_data: Vec<ShipmentItem>,
    pub registration_at: DateTime<Utc>,
    pub shipment_at: DateTime<Utc>,
}

impl ShipmentRecord {
    /// Build the record persisted after an order's packages were registered.
    ///
    /// Shipping costs are not computed by this workflow and are stored as 0.
    pub fn registered(
        order_id: OrderId,
        items: Vec<ShipmentItem>,
        registration_at: DateTime<Utc>,
        shipment_date: NaiveDate,
    ) -> Self {
        let transaction_id = items
            .iter()
            .map(|item| item.shipment_number.as_str())
            .collect::<Vec<_>>()
            .join(",");

        Self {
            order_id,
            transaction_id,
            shipping_service_provider: SHIPPING_SERVICE_PROVIDER.to_string(),
            shipping_status: ShippingStatus::Registered,
            shipping_costs: 0.0,
            additional_data: items,
            registration_at,
            shipment_at: normalize_shipment_date(shipment_date),
        }
    }

    /// Whether the registrar may process this order again.
    pub fn is_open(&self) -> bool {
        self.shipping_status == ShippingStatus::Open
    }
}

/// Normalize a caller-supplied shipment date to the fixed date-time format
/// the platform stores (midnight UTC, RFC 3339 on the wire).
pub fn normalize_shipment_date(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
