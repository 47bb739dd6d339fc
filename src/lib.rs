//! Server-side web front for the Fiscora budgeting app.
//!
//! Resolves the caller's session from the backend-issued `AccessToken`
//! cookie, serves page data for signed-in pages, and redirects into the
//! backend-hosted login/logout flow.

pub mod api;
pub mod config;
pub mod routes;
pub mod session;
pub mod state;
