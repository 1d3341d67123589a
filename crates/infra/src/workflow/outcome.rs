use std::collections::BTreeMap;

use serde::Serialize;

use shiplink_core::OrderId;
use shiplink_shipping::OrderResult;

/// Result of one batch invocation.
///
/// `results` is the caller-facing mapping: an order id absent from it means
/// "not processed", not "error". The `skipped` list carries the explicit
/// reason for every absence so operators are not left guessing; it feeds
/// structured logs and is not part of the platform-facing payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub results: BTreeMap<OrderId, OrderResult>,
    pub skipped: Vec<SkippedOrder>,
}

impl BatchOutcome {
    pub(crate) fn record_result(&mut self, order_id: OrderId, result: OrderResult) {
        self.results.insert(order_id, result);
    }

    pub(crate) fn record_skip(&mut self, order_id: OrderId, reason: SkipReason) {
        self.skipped.push(SkippedOrder { order_id, reason });
    }
}

/// An order that produced no result entry, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedOrder {
    pub order_id: OrderId,
    pub reason: SkipReason,
}

/// Why an order was left out of the result mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Shipping status gate: the order is already registered, or another
    /// in-flight registration holds its claim.
    AlreadyRegistered,
    /// The order does not exist in the platform.
    OrderNotFound,
    /// The order has no shipping packages; there is nothing to register.
    NoPackages,
    /// Every package of the order hit a carrier fault; the order stays open.
    AllPackagesFaulted,
    /// Cancellation found no shipment record or no registered packages.
    NothingToCancel,
    /// A repository, blob store or label download failure aborted the order.
    Storage(String),
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkipReason::AlreadyRegistered => write!(f, "already registered"),
            SkipReason::OrderNotFound => write!(f, "order not found"),
            SkipReason::NoPackages => write!(f, "no shipping packages"),
            SkipReason::AllPackagesFaulted => write!(f, "all packages faulted"),
            SkipReason::NothingToCancel => write!(f, "nothing to cancel"),
            SkipReason::Storage(msg) => write!(f, "storage failure: {msg}"),
        }
    }
}
