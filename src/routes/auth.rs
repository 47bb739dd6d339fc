//! Auth routes: redirects into the backend-hosted OAuth and logout flow.
//!
//! The backend owns the cookie: it sets `AccessToken` at the end of its OAuth
//! callback and clears it on logout. These handlers only check that the
//! caller's current session state fits the action, then hand off.

use axum::extract::State;
use axum::response::Response;

use super::{forbidden, found};
use crate::session::Locals;
use crate::state::AppState;

pub const PROFILE_PATH: &str = "/profile";

/// `GET /api/login/google`: start Google OAuth on the backend.
pub async fn login_google(State(state): State<AppState>, locals: Locals) -> Response {
    login_redirect(&state, &locals, "auth/google")
}

/// `GET /api/login/demo`: sign in as the shared demo account.
pub async fn login_demo(State(state): State<AppState>, locals: Locals) -> Response {
    login_redirect(&state, &locals, "auth/demo")
}

/// `GET /api/logout`: end the backend session. Only meaningful when signed in.
pub async fn logout(State(state): State<AppState>, locals: Locals) -> Response {
    if locals.session.is_none() {
        return forbidden();
    }
    found(&state.config.api_url("auth/logout"))
}

fn login_redirect(state: &AppState, locals: &Locals, backend_path: &str) -> Response {
    if locals.session.is_some() {
        return found(PROFILE_PATH);
    }
    found(&state.config.api_url(backend_path))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
