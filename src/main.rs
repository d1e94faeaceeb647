use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookboard::config::AppConfig;
use bookboard::handlers;
use bookboard::services::api::http::HttpBookingApi;
use bookboard::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(
        !config.resources.is_empty(),
        "RESOURCES must list at least one bookable resource"
    );
    tracing::info!(
        "bookings backend at {}, {} bookable resources",
        config.upstream_url,
        config.resources.len()
    );

    let api = HttpBookingApi::new(config.upstream_url.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        api: Box::new(api),
        bookings: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/api/bookings/:id",
            delete(handlers::bookings::cancel_booking),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
