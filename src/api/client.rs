//! reqwest-backed implementation of [`BackendApi`].

use std::time::Duration;

use reqwest::Url;
use reqwest::header::COOKIE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Budget, Transaction, TransactionQuery, User};
use super::{ApiError, BackendApi};
use crate::config::BackendTimeouts;
use crate::session::ACCESS_TOKEN_COOKIE;

pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client rooted at `base_url` (e.g. `https://api.example.com/_api`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the URL cannot be parsed or used as a base,
    /// or if the HTTP client fails to build.
    pub fn new(base_url: &str, timeouts: BackendTimeouts) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::ClientBuild(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::ClientBuild(format!("{base_url}: not a base URL")));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::ClientBuild(format!("{}: not a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET {base}/{segments..}` with the access token forwarded as the backend's auth cookie.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/` stays one segment.
    /// The response is returned whatever its status; callers decide what counts as failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the request cannot be sent.
    pub async fn authorize_fetch<Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        token: &str,
        query: Option<&Q>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.endpoint(segments)?;
        let mut request = self
            .http
            .get(url)
            .header(COOKIE, format!("{ACCESS_TOKEN_COOKIE}={token}"));
        if let Some(query) = query {
            request = request.query(query);
        }
        request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    async fn get_json<T, Q>(&self, segments: &[&str], token: &str, query: Option<&Q>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.authorize_fetch(segments, token, query).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status: status.as_u16(), body });
        }
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl BackendApi for BackendClient {
    async fn me(&self, token: &str) -> Result<User, ApiError> {
        self.get_json(&["users", "me"], token, None::<&()>).await
    }

    async fn budgets(&self, token: &str) -> Result<Vec<Budget>, ApiError> {
        self.get_json(&["budgets"], token, None::<&()>).await
    }

    async fn budget(&self, token: &str, id: &str) -> Result<Budget, ApiError> {
        self.get_json(&["budgets", id], token, None::<&()>).await
    }

    async fn transactions(&self, token: &str, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(&["transactions"], token, Some(query)).await
    }

    async fn income_types(&self, token: &str) -> Result<Vec<String>, ApiError> {
        self.get_json(&["transactions", "types", "income"], token, None::<&()>)
            .await
    }

    async fn expense_types(&self, token: &str) -> Result<Vec<String>, ApiError> {
        self.get_json(&["transactions", "types", "expense"], token, None::<&()>)
            .await
    }

    async fn intervals(&self, token: &str) -> Result<Vec<String>, ApiError> {
        self.get_json(&["transactions", "types", "intervals"], token, None::<&()>)
            .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
