use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, RwLock};

use shiplink_core::{OrderId, PackageTypeId, SequenceNumber};
use shiplink_orders::{Order, PackageType, ShippingPackage};
use shiplink_shipping::{ShipmentRecord, ShippingStatus};

use super::{OrderRepository, PackageUpdate, RepositoryError, ShipmentRecordRepository};

/// In-memory order repository.
///
/// Intended for tests/dev. Seed it with orders, packages and package types,
/// then hand it to the workflow.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderId, Order>>,
    packages: RwLock<HashMap<OrderId, Vec<ShippingPackage>>>,
    package_types: RwLock<HashMap<PackageTypeId, PackageType>>,
    package_updates: RwLock<HashMap<SequenceNumber, PackageUpdate>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_order(&self, order: Order) {
        self.orders.write().unwrap().insert(order.id, order);
    }

    pub fn insert_package(&self, package: ShippingPackage) {
        self.packages
            .write()
            .unwrap()
            .entry(package.order_id)
            .or_default()
            .push(package);
    }

    pub fn insert_package_type(&self, package_type: PackageType) {
        self.package_types
            .write()
            .unwrap()
            .insert(package_type.id, package_type);
    }

    /// Carrier data written back per package row, for test assertions.
    pub fn package_update(&self, sequence_number: SequenceNumber) -> Option<PackageUpdate> {
        self.package_updates
            .read()
            .unwrap()
            .get(&sequence_number)
            .cloned()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn find_order(&self, id: OrderId) -> Result<Order, RepositoryError> {
        self.orders
            .read()
            .map_err(|_| RepositoryError::Backend("lock poisoned".to_string()))?
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::OrderNotFound(id))
    }

    fn list_packages(&self, order_id: OrderId) -> Result<Vec<ShippingPackage>, RepositoryError> {
        Ok(self
            .packages
            .read()
            .map_err(|_| RepositoryError::Backend("lock poisoned".to_string()))?
            .get(&order_id)
            .cloned()
            .unwrap_or_default())
    }

    fn find_package_type(&self, id: PackageTypeId) -> Result<PackageType, RepositoryError> {
        self.package_types
            .read()
            .map_err(|_| RepositoryError::Backend("lock poisoned".to_string()))?
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::PackageTypeNotFound(id))
    }

    fn update_package(
        &self,
        sequence_number: SequenceNumber,
        update: PackageUpdate,
    ) -> Result<(), RepositoryError> {
        self.package_updates
            .write()
            .map_err(|_| RepositoryError::Backend("lock poisoned".to_string()))?
            .insert(sequence_number, update);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RecordState {
    records: HashMap<OrderId, ShipmentRecord>,
    claims: HashSet<OrderId>,
}

/// In-memory shipment record store.
///
/// Claims and records live behind one lock so `claim_for_registration` is
/// atomic with respect to `save`/`reset`: two racing registrations of the
/// same open order cannot both pass the filter.
#[derive(Debug, Default)]
pub struct InMemoryShipmentRecordRepository {
    state: Mutex<RecordState>,
}

impl InMemoryShipmentRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, for tests.
    pub fn insert(&self, record: ShipmentRecord) {
        let mut state = self.state.lock().unwrap();
        state.records.insert(record.order_id, record);
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, RecordState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Backend("lock poisoned".to_string()))
    }
}

impl ShipmentRecordRepository for InMemoryShipmentRecordRepository {
    fn get(&self, order_id: OrderId) -> Result<Option<ShipmentRecord>, RepositoryError> {
        Ok(self.lock()?.records.get(&order_id).cloned())
    }

    fn save(&self, record: ShipmentRecord) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        state.claims.remove(&record.order_id);
        state.records.insert(record.order_id, record);
        Ok(())
    }

    fn reset(&self, order_id: OrderId) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        state.claims.remove(&order_id);
        if let Some(record) = state.records.get_mut(&order_id) {
            record.shipping_status = ShippingStatus::Open;
            record.transaction_id.clear();
            record.additional_data.clear();
        }
        Ok(())
    }

    fn claim_for_registration(&self, order_id: OrderId) -> Result<bool, RepositoryError> {
        let mut state = self.lock()?;
        if state.claims.contains(&order_id) {
            return Ok(false);
        }
        let open = match state.records.get(&order_id) {
            None => true,
            Some(record) => record.is_open(),
        };
        if open {
            state.claims.insert(order_id);
        }
        Ok(open)
    }

    fn release_claim(&self, order_id: OrderId) -> Result<(), RepositoryError> {
        self.lock()?.claims.remove(&order_id);
        Ok(())
    }
}
