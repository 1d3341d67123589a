//! Repository ports onto the host platform's order and shipment data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shiplink_core::{OrderId, PackageTypeId, SequenceNumber, ShipmentNumber};
use shiplink_orders::{Order, PackageType, ShippingPackage};
use shiplink_shipping::ShipmentRecord;

pub mod in_memory;

pub use in_memory::{InMemoryOrderRepository, InMemoryShipmentRecordRepository};

/// Failure of a repository call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("package type {0} not found")]
    PackageTypeNotFound(PackageTypeId),

    #[error("shipping package {0} not found")]
    PackageNotFound(SequenceNumber),

    /// Platform-side storage failure. Fatal to the order being processed,
    /// never to the batch.
    #[error("repository backend error: {0}")]
    Backend(String),
}

/// Carrier data written back onto a shipping-package row after registration,
/// linking the internal package to the externally stored label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageUpdate {
    pub package_number: ShipmentNumber,
    /// Blob-store key of the stored label document.
    pub label: String,
}

/// Read access to orders, their packages and the package-type catalog,
/// plus the one write-back the workflow performs on packages.
pub trait OrderRepository: Send + Sync {
    fn find_order(&self, id: OrderId) -> Result<Order, RepositoryError>;

    fn list_packages(&self, order_id: OrderId) -> Result<Vec<ShippingPackage>, RepositoryError>;

    fn find_package_type(&self, id: PackageTypeId) -> Result<PackageType, RepositoryError>;

    fn update_package(
        &self,
        sequence_number: SequenceNumber,
        update: PackageUpdate,
    ) -> Result<(), RepositoryError>;
}

/// Persistence of the shipment records this workflow owns.
///
/// `claim_for_registration` is the concurrency gate: it atomically checks
/// that an order is still open (record absent or status `open`, and not
/// claimed by another in-flight registration) and marks it claimed. `save`,
/// `reset` and `release_claim` all clear the claim, so an aborted order
/// becomes eligible again.
pub trait ShipmentRecordRepository: Send + Sync {
    fn get(&self, order_id: OrderId) -> Result<Option<ShipmentRecord>, RepositoryError>;

    /// Upsert the record for `record.order_id` and release its claim.
    fn save(&self, record: ShipmentRecord) -> Result<(), RepositoryError>;

    /// Reset the record back to open: clear status, transaction ids and
    /// additional data. The order becomes eligible for re-registration.
    fn reset(&self, order_id: OrderId) -> Result<(), RepositoryError>;

    /// Atomically claim an open order for registration. Returns `false`
    /// when the order is already registered or already claimed.
    fn claim_for_registration(&self, order_id: OrderId) -> Result<bool, RepositoryError>;

    /// Release a claim taken by `claim_for_registration` without writing a
    /// record (abort path).
    fn release_claim(&self, order_id: OrderId) -> Result<(), RepositoryError>;
}

impl<T: OrderRepository + ?Sized> OrderRepository for std::sync::Arc<T> {
    fn find_order(&self, id: OrderId) -> Result<Order, RepositoryError> {
        (**self).find_order(id)
    }

    fn list_packages(&self, order_id: OrderId) -> Result<Vec<ShippingPackage>, RepositoryError> {
        (**self).list_packages(order_id)
    }

    fn find_package_type(&self, id: PackageTypeId) -> Result<PackageType, RepositoryError> {
        (**self).find_package_type(id)
    }

    fn update_package(
        &self,
        sequence_number: SequenceNumber,
        update: PackageUpdate,
    ) -> Result<(), RepositoryError> {
        (**self).update_package(sequence_number, update)
    }
}

impl<T: ShipmentRecordRepository + ?Sized> ShipmentRecordRepository for std::sync::Arc<T> {
    fn get(&self, order_id: OrderId) -> Result<Option<ShipmentRecord>, RepositoryError> {
        (**self).get(order_id)
    }

    fn save(&self, record: ShipmentRecord) -> Result<(), RepositoryError> {
        (**self).save(record)
    }

    fn reset(&self, order_id: OrderId) -> Result<(), RepositoryError> {
        (**self).reset(order_id)
    }

    fn claim_for_registration(&self, order_id: OrderId) -> Result<bool, RepositoryError> {
        (**self).claim_for_registration(order_id)
    }

    fn release_claim(&self, order_id: OrderId) -> Result<(), RepositoryError> {
        (**self).release_claim(order_id)
    }
}
