// main.rs
mod bulb;
mod config;
mod docs;
mod error;
mod handlers;
mod metrics;
mod models;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use handlers::*;
use models::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = config::Settings::new()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    if settings.metrics.enabled {
        metrics::setup_metrics(settings.metrics.port);
    }

    let bulb = bulb::ShellyBulb::new(
        settings.bulb.host.as_str(),
        Duration::from_secs(settings.bulb.timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("Failed to build bulb client: {}", e))?;
    let state = Arc::new(AppState::new(Arc::new(bulb)));

    let app = Router::new()
        .route("/", get(|| async { Redirect::permanent("/static/") }))
        .route("/api/color", post(set_color))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&settings.server.address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind address: {}", e))?;

    tracing::info!("Server started on {}", settings.server.address);
    tracing::info!("Forwarding colors to bulb at {}", settings.bulb.host);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
