use std::sync::Arc;

use fiscora_web::api::BackendClient;
use fiscora_web::config::Config;
use fiscora_web::{routes, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the process environment may already be complete.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("invalid configuration");
    let api = BackendClient::new(&config.public_api_url, config.timeouts).expect("backend client init failed");
    tracing::info!(backend = %config.public_api_url, "backend client initialized");

    let port = config.port;
    let state = state::AppState::new(config, Arc::new(api));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "fiscora-web listening");
    axum::serve(listener, app).await.expect("server failed");
}
