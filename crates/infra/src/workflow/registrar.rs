use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use shiplink_carrier::{CarrierClient, RegisterShipmentRequest};
use shiplink_core::OrderId;
use shiplink_shipping::{
    OrderIdsInput, OrderResult, SenderConfig, ShipmentItem, ShipmentRecord,
    SHIPPING_SERVICE_PROVIDER,
};

use crate::blob_store::BlobStore;
use crate::label::LabelFetcher;
use crate::repository::{OrderRepository, PackageUpdate, RepositoryError, ShipmentRecordRepository};

use super::outcome::{BatchOutcome, SkipReason};
use super::{receiver_party, sender_party};

/// Registers shipments for batches of open orders.
///
/// Per order: claim it (idempotency gate), resolve receiver, sender and
/// packages, register each package with the carrier, store its label, write
/// the carrier data back onto the package row, and finally persist one
/// shipment record covering everything that succeeded.
pub struct ShipmentRegistrar<O, R, B, L> {
    orders: O,
    records: R,
    blobs: B,
    labels: L,
    carrier: Arc<dyn CarrierClient>,
    sender: SenderConfig,
}

impl<O, R, B, L> ShipmentRegistrar<O, R, B, L>
where
    O: OrderRepository,
    R: ShipmentRecordRepository,
    B: BlobStore,
    L: LabelFetcher,
{
    pub fn new(
        orders: O,
        records: R,
        blobs: B,
        labels: L,
        carrier: Arc<dyn CarrierClient>,
        sender: SenderConfig,
    ) -> Self {
        Self {
            orders,
            records,
            blobs,
            labels,
            carrier,
            sender,
        }
    }

    /// Register shipments for every open order in `input`.
    ///
    /// Never fails as a whole: orders that cannot be processed end up in the
    /// outcome's `skipped` list and the batch moves on.
    pub fn register(&self, input: &OrderIdsInput, shipment_date: NaiveDate) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for order_id in input.normalize() {
            match self.records.claim_for_registration(order_id) {
                Ok(true) => {}
                Ok(false) => {
                    debug!(%order_id, "order not open, skipping registration");
                    outcome.record_skip(order_id, SkipReason::AlreadyRegistered);
                    continue;
                }
                Err(e) => {
                    warn!(%order_id, error = %e, "claim failed, skipping order");
                    outcome.record_skip(order_id, SkipReason::Storage(e.to_string()));
                    continue;
                }
            }

            match self.register_order(order_id, shipment_date) {
                Ok(result) => outcome.record_result(order_id, result),
                Err(reason) => {
                    // The record was not written; free the claim so the
                    // order stays eligible for a retry.
                    if let Err(e) = self.records.release_claim(order_id) {
                        warn!(%order_id, error = %e, "failed to release registration claim");
                    }
                    warn!(%order_id, %reason, "order skipped during registration");
                    outcome.record_skip(order_id, reason);
                }
            }
        }

        outcome
    }

    /// Process a single claimed order. Any error here aborts this order
    /// only; its shipment record is left untouched.
    fn register_order(
        &self,
        order_id: OrderId,
        shipment_date: NaiveDate,
    ) -> Result<OrderResult, SkipReason> {
        let order = match self.orders.find_order(order_id) {
            Ok(order) => order,
            Err(RepositoryError::OrderNotFound(_)) => return Err(SkipReason::OrderNotFound),
            Err(e) => return Err(SkipReason::Storage(e.to_string())),
        };

        let receiver = receiver_party(&order.delivery_address);
        let sender = sender_party(&self.sender);

        let packages = self
            .orders
            .list_packages(order_id)
            .map_err(|e| SkipReason::Storage(e.to_string()))?;
        if packages.is_empty() {
            return Err(SkipReason::NoPackages);
        }

        let mut items: Vec<ShipmentItem> = Vec::with_capacity(packages.len());
        let mut last_status = String::new();

        for package in &packages {
            let package_type = self
                .orders
                .find_package_type(package.package_type_id)
                .map_err(|e| SkipReason::Storage(e.to_string()))?;
            let (length, width, height) = package_type.dimensions().as_triple();

            let request = RegisterShipmentRequest {
                receiver: receiver.clone(),
                sender: sender.clone(),
                weight_grams: package.weight_grams,
                length,
                width,
                height,
            };

            let response = match self.carrier.register_shipment(&request) {
                Ok(response) => response,
                Err(fault) => {
                    warn!(
                        %order_id,
                        package_id = %package.id,
                        fault = %fault,
                        "carrier fault, skipping package"
                    );
                    continue;
                }
            };

            let label = self
                .labels
                .fetch(&response.label_url)
                .map_err(|e| SkipReason::Storage(e.to_string()))?;
            let stored = self
                .blobs
                .upload(
                    SHIPPING_SERVICE_PROVIDER,
                    &response.shipment_number.label_key(),
                    label,
                )
                .map_err(|e| SkipReason::Storage(e.to_string()))?;

            self.orders
                .update_package(
                    package.sequence_number,
                    PackageUpdate {
                        package_number: response.shipment_number.clone(),
                        label: stored.key,
                    },
                )
                .map_err(|e| SkipReason::Storage(e.to_string()))?;

            items.push(ShipmentItem {
                label_url: response.label_url,
                shipment_number: response.shipment_number,
            });
            last_status = response.status;
        }

        if items.is_empty() {
            return Err(SkipReason::AllPackagesFaulted);
        }

        let record =
            ShipmentRecord::registered(order_id, items.clone(), Utc::now(), shipment_date);
        self.records
            .save(record)
            .map_err(|e| SkipReason::Storage(e.to_string()))?;

        debug!(%order_id, packages = items.len(), "shipment registered");
        Ok(OrderResult::registered(&last_status, items))
    }
}
