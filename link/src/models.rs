//! Wire models for the SQL RPC endpoint.

use serde::{Deserialize, Serialize};

/// Request payload for the `exec_sql` remote procedure.
///
/// # Examples
///
/// ```rust
/// use botica_link::SqlRequest;
///
/// let request = SqlRequest {
///     sql: "CREATE TABLE pharmacies (id uuid PRIMARY KEY)".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlRequest {
    /// The SQL statement text, exactly as extracted from the script
    pub sql: String,
}

/// Error body returned by the endpoint for a rejected statement.
///
/// Only `message` is guaranteed; the remaining fields follow the REST
/// gateway's error shape and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    /// Human-readable error message
    pub message: String,

    /// Postgres error code (e.g. `42P07` for duplicate table)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Additional detail line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Suggested remediation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
