use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use shiplink_shipping::OrderIdsInput;

use crate::app::{errors, AppServices};

pub fn router() -> Router {
    Router::new().nest("/shipments", shipments_router())
}

fn shipments_router() -> Router {
    Router::new()
        .route("/register", post(register_shipments))
        .route("/cancel", post(cancel_shipments))
}

/// Request body for both batch operations. `orderIds` accepts a single
/// number or a list of numbers, per the platform calling convention.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShipmentBatchRequest {
    order_ids: serde_json::Value,
    #[serde(default)]
    shipment_date: Option<NaiveDate>,
}

pub async fn register_shipments(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<ShipmentBatchRequest>,
) -> axum::response::Response {
    let input = match OrderIdsInput::from_value(&body.order_ids) {
        Ok(input) => input,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_input", e.to_string()),
    };
    let shipment_date = body.shipment_date.unwrap_or_else(|| Utc::now().date_naive());

    let registrar = services.registrar.clone();
    let outcome =
        match tokio::task::spawn_blocking(move || registrar.register(&input, shipment_date)).await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                return errors::json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "workflow_panicked",
                    e.to_string(),
                )
            }
        };

    for skip in &outcome.skipped {
        tracing::info!(order_id = %skip.order_id, reason = %skip.reason, "order not registered");
    }

    Json(outcome.results).into_response()
}

pub async fn cancel_shipments(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<ShipmentBatchRequest>,
) -> axum::response::Response {
    let input = match OrderIdsInput::from_value(&body.order_ids) {
        Ok(input) => input,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_input", e.to_string()),
    };

    let canceller = services.canceller.clone();
    let outcome = match tokio::task::spawn_blocking(move || canceller.cancel(&input)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "workflow_panicked",
                e.to_string(),
            )
        }
    };

    for skip in &outcome.skipped {
        tracing::info!(order_id = %skip.order_id, reason = %skip.reason, "order not cancelled");
    }

    Json(outcome.results).into_response()
}
