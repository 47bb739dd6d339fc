//! Backend API: the Fiscora service that owns users, budgets and transactions.
//!
//! DESIGN
//! ======
//! Every call is authenticated by forwarding the caller's access token. The
//! [`BackendApi`] trait is the seam between request handling and the wire:
//! handlers and the session hook only see the trait, and tests swap in a
//! mock without running an HTTP server.

pub mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{Budget, BudgetExpense, Transaction, TransactionQuery, User};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend could not be reached or the connection failed mid-request.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend responded with {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("backend response parse failed: {0}")]
    Decode(String),

    /// The HTTP client or base URL could not be set up.
    #[error("backend client build failed: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// HTTP status returned by the backend, if it answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    /// Resolve the account behind `token` (`GET users/me`).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on network failure, non-success status, or a malformed body.
    async fn me(&self, token: &str) -> Result<User, ApiError>;

    async fn budgets(&self, token: &str) -> Result<Vec<Budget>, ApiError>;

    async fn budget(&self, token: &str, id: &str) -> Result<Budget, ApiError>;

    async fn transactions(&self, token: &str, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError>;

    async fn income_types(&self, token: &str) -> Result<Vec<String>, ApiError>;

    async fn expense_types(&self, token: &str) -> Result<Vec<String>, ApiError>;

    async fn intervals(&self, token: &str) -> Result<Vec<String>, ApiError>;
}
