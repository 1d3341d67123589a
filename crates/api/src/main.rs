#[tokio::main]
async fn main() {
    shiplink_observability::init();

    let config = shiplink_api::config::AppConfig::from_env();
    tracing::info!(mode = ?config.carrier.mode, "starting shiplink-api");

    let services = shiplink_api::app::AppServices::from_config(&config);
    let app = shiplink_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
