use std::sync::Arc;

use axum::{Extension, Router};

use shiplink_carrier::{client_for, CarrierMode};
use shiplink_infra::blob_store::InMemoryBlobStore;
use shiplink_infra::label::{HttpLabelFetcher, InMemoryLabelFetcher, LabelFetcher};
use shiplink_infra::repository::{InMemoryOrderRepository, InMemoryShipmentRecordRepository};
use shiplink_infra::workflow::{ShipmentCanceller, ShipmentRegistrar};

use crate::config::AppConfig;

pub mod errors;
pub mod routes;

pub type AppRegistrar = ShipmentRegistrar<
    Arc<InMemoryOrderRepository>,
    Arc<InMemoryShipmentRecordRepository>,
    Arc<InMemoryBlobStore>,
    Arc<dyn LabelFetcher>,
>;

pub type AppCanceller = ShipmentCanceller<Arc<InMemoryShipmentRecordRepository>>;

/// Wired workflow components plus handles on the in-memory collaborators
/// (the latter are used by tests and sandbox seeding).
#[derive(Clone)]
pub struct AppServices {
    pub registrar: Arc<AppRegistrar>,
    pub canceller: Arc<AppCanceller>,
    pub orders: Arc<InMemoryOrderRepository>,
    pub records: Arc<InMemoryShipmentRecordRepository>,
    pub blobs: Arc<InMemoryBlobStore>,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Self {
        let orders = Arc::new(InMemoryOrderRepository::new());
        let records = Arc::new(InMemoryShipmentRecordRepository::new());
        let blobs = Arc::new(InMemoryBlobStore::new());

        let carrier = client_for(&config.carrier);
        let labels: Arc<dyn LabelFetcher> = match config.carrier.mode {
            CarrierMode::Sandbox => Arc::new(InMemoryLabelFetcher::with_placeholder()),
            CarrierMode::Production => Arc::new(HttpLabelFetcher::new(config.carrier.timeout())),
        };

        let registrar = Arc::new(ShipmentRegistrar::new(
            orders.clone(),
            records.clone(),
            blobs.clone(),
            labels,
            carrier.clone(),
            config.sender.clone(),
        ));
        let canceller = Arc::new(ShipmentCanceller::new(records.clone(), carrier));

        Self {
            registrar,
            canceller,
            orders,
            records,
            blobs,
        }
    }
}

/// Build the router the host platform calls into.
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(Extension(Arc::new(services)))
}
