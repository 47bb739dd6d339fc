//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route sits behind the session hook ([`crate::session::resolve_session`]),
//! so handlers see resolved identity in request extensions. Page loaders
//! answer with the JSON payload a renderer would receive; auth endpoints only
//! redirect into the backend-hosted login/logout flow.

pub mod auth;
pub mod pages;

use axum::Router;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::session;
use crate::state::AppState;

/// Full application router with the session hook, compression, and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/budgets", get(pages::budgets))
        .route("/budgets/{id}", get(pages::budget))
        .route("/transactions", get(pages::transactions))
        .route("/profile", get(pages::profile))
        .route("/api/login/google", get(auth::login_google))
        .route("/api/login/demo", get(auth::login_demo))
        .route("/api/logout", get(auth::logout))
        .route("/healthz", get(healthz))
        .layer(from_fn_with_state(state.clone(), session::resolve_session))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

fn request_span(request: &Request) -> tracing::Span {
    tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// `302 Found` to `location`.
#[must_use]
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

/// Bare `403 Forbidden`.
#[must_use]
pub fn forbidden() -> Response {
    StatusCode::FORBIDDEN.into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
