//! Session resolution: the global hook that runs before every handler.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser carries an `AccessToken` cookie issued by the backend. On each
//! request this hook asks the backend who the token belongs to and attaches
//! the answer to the request as [`Locals`]. Handlers never talk to the cookie
//! directly; they read `Locals` or demand an [`Authenticated`] caller.
//!
//! The demo account is shared and read-only: any non-read request from it is
//! rejected here with `401` before reaching a handler.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::api::{BackendApi, User};
use crate::routes::found;
use crate::state::AppState;

pub const ACCESS_TOKEN_COOKIE: &str = "AccessToken";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
}

/// Per-request identity state. `user` is only ever set alongside `session`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locals {
    pub session: Option<Session>,
    pub user: Option<User>,
}

impl Locals {
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_demo)
    }
}

/// The only method the demo account may use.
#[must_use]
pub fn is_read_method(method: &Method) -> bool {
    *method == Method::GET
}

/// Resolve `token` into identity state via the backend.
///
/// Any failure (network, status, body) is logged and yields empty `Locals`.
pub async fn identify(api: &dyn BackendApi, token: &str, demo_username: &str) -> Locals {
    match api.me(token).await {
        Ok(mut user) => {
            user.is_demo = user.username == demo_username;
            Locals { session: Some(Session { access_token: token.to_owned() }), user: Some(user) }
        }
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            Locals::default()
        }
    }
}

/// Global request hook. Attach with `axum::middleware::from_fn_with_state`.
pub async fn resolve_session(State(state): State<AppState>, jar: CookieJar, mut request: Request, next: Next) -> Response {
    let token = jar
        .get(ACCESS_TOKEN_COOKIE)
        .map(Cookie::value)
        .filter(|t| !t.is_empty());

    let locals = match token {
        Some(token) => identify(state.api.as_ref(), token, &state.config.demo_username).await,
        None => Locals::default(),
    };

    if locals.is_demo() && !is_read_method(request.method()) {
        tracing::warn!(method = %request.method(), uri = %request.uri(), "demo account write rejected");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    request.extensions_mut().insert(locals);
    next.run(request).await
}

// =============================================================================
// EXTRACTORS
// =============================================================================

impl<S> FromRequestParts<S> for Locals
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Locals>().cloned().unwrap_or_default())
    }
}

/// A caller with a resolved session and user.
/// Use as a handler parameter to require login; anyone else is sent to `/login`.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub session: Session,
    pub user: User,
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locals = parts.extensions.get::<Locals>().cloned().unwrap_or_default();
        match (locals.session, locals.user) {
            (Some(session), Some(user)) if !session.access_token.is_empty() => Ok(Self { session, user }),
            _ => Err(found(LOGIN_PATH)),
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
