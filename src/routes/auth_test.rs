use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use crate::routes::app;
use crate::state::test_helpers::{MockBackend, location, request, test_app_state, user};

use super::PROFILE_PATH;

fn backend() -> Arc<MockBackend> {
    Arc::new(MockBackend::new("tok", user("alice")))
}

async fn get(uri: &str, token: Option<&str>) -> axum::response::Response {
    app(test_app_state(backend()))
        .oneshot(request("GET", uri, token))
        .await
        .unwrap()
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn google_login_redirects_anonymous_to_backend() {
    let response = get("/api/login/google", None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("http://backend.test/_api/auth/google"));
}

#[tokio::test]
async fn google_login_sends_signed_in_user_to_profile() {
    let response = get("/api/login/google", Some("tok")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some(PROFILE_PATH));
}

#[tokio::test]
async fn google_login_with_stale_cookie_starts_oauth() {
    let response = get("/api/login/google", Some("stale")).await;
    assert_eq!(location(&response), Some("http://backend.test/_api/auth/google"));
}

#[tokio::test]
async fn demo_login_redirects_anonymous_to_backend() {
    let response = get("/api/login/demo", None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("http://backend.test/_api/auth/demo"));
}

#[tokio::test]
async fn demo_login_sends_signed_in_user_to_profile() {
    let response = get("/api/login/demo", Some("tok")).await;
    assert_eq!(location(&response), Some(PROFILE_PATH));
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_without_session_is_forbidden() {
    let response = get("/api/logout", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(location(&response), None);
}

#[tokio::test]
async fn logout_with_stale_cookie_is_forbidden() {
    let response = get("/api/logout", Some("stale")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logout_redirects_signed_in_user_to_backend() {
    let response = get("/api/logout", Some("tok")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), Some("http://backend.test/_api/auth/logout"));
}

#[tokio::test]
async fn demo_account_can_log_out() {
    let backend = Arc::new(MockBackend::new("tok", user("demo")));
    let response = app(test_app_state(backend))
        .oneshot(request("GET", "/api/logout", Some("tok")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
}
