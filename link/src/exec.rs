//! Statement execution against the SQL RPC endpoint.
//!
//! One outbound HTTPS call per statement, no state retained between calls.
//! The executor never retries and sets no request timeout: a statement call
//! waits on the transport default.

use crate::{
    auth::AuthProvider,
    error::{BoticaLinkError, Result},
    models::{RpcErrorBody, SqlRequest},
};
use log::{debug, warn};
use serde_json::Value as JsonValue;
use std::time::Instant;

/// Classified result of executing one statement.
///
/// A `RemoteError` is the endpoint rejecting the statement (syntax error,
/// duplicate table, permission denied); a `TransportError` is the call
/// itself failing before an answer arrived. Both are non-fatal to a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementOutcome {
    /// The endpoint accepted and ran the statement
    Success,

    /// The endpoint answered with an application-level error
    RemoteError(String),

    /// The HTTP call failed (connect, DNS, TLS, decode)
    TransportError(String),
}

impl StatementOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StatementOutcome::Success)
    }
}

/// Seam for driving a batch through any statement-executing backend.
///
/// The production implementation is [`SqlExecutor`]; tests substitute a
/// scripted stub to exercise batch behavior without a network.
#[async_trait::async_trait]
pub trait StatementExecutor: Send + Sync {
    /// Execute one statement and classify the outcome. Never panics,
    /// never retries.
    async fn execute(&self, sql: &str) -> StatementOutcome;
}

/// Executes statements via the `exec_sql` remote procedure.
#[derive(Clone)]
pub struct SqlExecutor {
    base_url: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
}

impl SqlExecutor {
    pub(crate) fn new(base_url: String, http_client: reqwest::Client, auth: AuthProvider) -> Self {
        Self {
            base_url,
            http_client,
            auth,
        }
    }

    /// Execute one statement and return the endpoint's rows on success.
    ///
    /// DDL and DML statements usually come back with an empty payload;
    /// SELECTs return one JSON object per row.
    pub async fn run(&self, sql: &str) -> Result<Vec<JsonValue>> {
        let request = SqlRequest {
            sql: sql.to_string(),
        };

        let sql_preview = if sql.chars().count() > 80 {
            format!("{}...", sql.chars().take(80).collect::<String>())
        } else {
            sql.to_string()
        };
        debug!(
            "[RPC] Executing: \"{}\" (len={})",
            sql_preview.replace('\n', " "),
            sql.len()
        );

        let url = format!("{}/rest/v1/rpc/exec_sql", self.base_url);
        let req_builder = self.auth.apply_to_request(self.http_client.post(&url).json(&request));

        let start = Instant::now();
        let response = req_builder.send().await?;
        let status = response.status();
        debug!(
            "[RPC] Response: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if status.is_success() {
            let body: JsonValue = response.json().await?;
            Ok(rows_from_payload(body))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // The gateway wraps failures in a JSON body with a message field
            let message = match serde_json::from_str::<RpcErrorBody>(&error_text) {
                Ok(body) => body.message,
                Err(_) => error_text,
            };

            warn!("[RPC] Server error: status={} message=\"{}\"", status, message);

            Err(BoticaLinkError::ServerError {
                status_code: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait::async_trait]
impl StatementExecutor for SqlExecutor {
    async fn execute(&self, sql: &str) -> StatementOutcome {
        classify(self.run(sql).await.map(|_| ()))
    }
}

/// Map an execution result onto the outcome taxonomy.
pub(crate) fn classify(result: Result<()>) -> StatementOutcome {
    match result {
        Ok(()) => StatementOutcome::Success,
        Err(BoticaLinkError::ServerError { message, .. }) => StatementOutcome::RemoteError(message),
        Err(e) => StatementOutcome::TransportError(e.to_string()),
    }
}

/// Normalize the success payload into a row list.
fn rows_from_payload(body: JsonValue) -> Vec<JsonValue> {
    match body {
        JsonValue::Null => Vec::new(),
        JsonValue::Array(rows) => rows,
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_success() {
        assert_eq!(classify(Ok(())), StatementOutcome::Success);
    }

    #[test]
    fn test_classify_server_error_is_remote() {
        let result = Err(BoticaLinkError::ServerError {
            status_code: 400,
            message: "syntax error at or near \"CREAT\"".into(),
        });
        assert_eq!(
            classify(result),
            StatementOutcome::RemoteError("syntax error at or near \"CREAT\"".into())
        );
    }

    #[test]
    fn test_classify_network_error_is_transport() {
        let result = Err(BoticaLinkError::NetworkError("connection refused".into()));
        match classify(result) {
            StatementOutcome::TransportError(msg) => {
                assert!(msg.contains("connection refused"), "got: {}", msg)
            }
            other => panic!("Expected TransportError, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_from_payload() {
        assert!(rows_from_payload(JsonValue::Null).is_empty());

        let rows = rows_from_payload(json!([{"table_name": "pharmacies"}]));
        assert_eq!(rows.len(), 1);

        // A bare scalar payload still surfaces as one row
        let rows = rows_from_payload(json!({"status": "ok"}));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_outcome_is_success() {
        assert!(StatementOutcome::Success.is_success());
        assert!(!StatementOutcome::RemoteError("x".into()).is_success());
        assert!(!StatementOutcome::TransportError("x".into()).is_success());
    }
}
