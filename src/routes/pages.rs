//! Page loaders: data for each signed-in page, fetched with the caller's token.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use super::found;
use crate::api::{ApiError, Budget, Transaction, TransactionQuery, User};
use crate::session::{Authenticated, LOGIN_PATH};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BudgetsPage {
    pub budgets: Vec<Budget>,
    pub demo: bool,
}

#[derive(Debug, Serialize)]
pub struct BudgetPage {
    pub budget: Budget,
    pub demo: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPage {
    pub transactions: Vec<Transaction>,
    pub income_types: Vec<String>,
    pub expense_types: Vec<String>,
    pub intervals: Vec<String>,
    pub demo: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub user: User,
}

/// Map a backend failure during a page load to the response the browser sees.
pub(crate) fn api_error_to_response(err: ApiError, page: &str) -> Response {
    match err.status() {
        // Token expired between the hook and this call.
        Some(401) => found(LOGIN_PATH),
        Some(403) => StatusCode::FORBIDDEN.into_response(),
        Some(404) => StatusCode::NOT_FOUND.into_response(),
        _ => {
            tracing::error!(error = %err, page, "page load failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// `GET /budgets`
pub async fn budgets(State(state): State<AppState>, auth: Authenticated) -> Result<Json<BudgetsPage>, Response> {
    let budgets = state
        .api
        .budgets(&auth.session.access_token)
        .await
        .map_err(|e| api_error_to_response(e, "budgets"))?;

    Ok(Json(BudgetsPage { budgets, demo: auth.user.is_demo }))
}

/// `GET /budgets/{id}`
pub async fn budget(
    State(state): State<AppState>,
    auth: Authenticated,
    Path(id): Path<String>,
) -> Result<Json<BudgetPage>, Response> {
    let budget = state
        .api
        .budget(&auth.session.access_token, &id)
        .await
        .map_err(|e| api_error_to_response(e, "budget"))?;

    Ok(Json(BudgetPage { budget, demo: auth.user.is_demo }))
}

/// `GET /transactions?month=&year=&income=`
pub async fn transactions(
    State(state): State<AppState>,
    auth: Authenticated,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<TransactionsPage>, Response> {
    let token = auth.session.access_token.as_str();
    let api = state.api.as_ref();

    let (transactions, income_types, expense_types, intervals) = tokio::try_join!(
        api.transactions(token, &query),
        api.income_types(token),
        api.expense_types(token),
        api.intervals(token),
    )
    .map_err(|e| api_error_to_response(e, "transactions"))?;

    Ok(Json(TransactionsPage { transactions, income_types, expense_types, intervals, demo: auth.user.is_demo }))
}

/// `GET /profile`: the user record resolved by the hook; no extra backend call.
pub async fn profile(auth: Authenticated) -> Json<ProfilePage> {
    Json(ProfilePage { user: auth.user })
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
