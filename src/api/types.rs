//! Records exchanged with the Fiscora backend.

use serde::{Deserialize, Serialize};

/// The account behind an access token, as returned by `users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Not sent by the backend; derived from `username` when the session resolves.
    #[serde(default)]
    pub is_demo: bool,
}

/// One allocation line of a budget. Unmodeled fields pass through like on [`Budget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetExpense {
    pub id: i32,
    pub name: String,
    pub allocated_amount: f64,
    #[serde(default)]
    pub current_amount: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A budget as the page receives it. Fields not named here are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub expenses: Vec<BudgetExpense>,
    /// Only populated by the single-budget endpoint.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,
    /// Backend fields this server does not inspect, e.g. `created`/`updated`.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A transaction row. Fields this server does not inspect are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i32,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Filter for the transactions listing. Absent fields let the backend pick its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<bool>,
}
