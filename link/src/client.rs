//! Main Botica client with builder pattern.
//!
//! Provides the single entry point for connecting to the managed database's
//! SQL RPC endpoint.

use crate::{
    auth::AuthProvider,
    error::{BoticaLinkError, Result},
    exec::SqlExecutor,
};
use serde_json::Value as JsonValue;

/// Client for the Botica SQL RPC endpoint.
///
/// Use [`BoticaLinkClientBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust,no_run
/// use botica_link::{AuthProvider, BoticaLinkClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BoticaLinkClient::builder()
///     .base_url("https://abcdefgh.supabase.co")
///     .auth(AuthProvider::service_key("sb-secret".to_string()))
///     .build()?;
///
/// let rows = client.execute_sql("SELECT 1").await?;
/// println!("{} rows", rows.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BoticaLinkClient {
    base_url: String,
    executor: SqlExecutor,
}

impl BoticaLinkClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> BoticaLinkClientBuilder {
        BoticaLinkClientBuilder::new()
    }

    /// Execute one SQL statement and return the endpoint's rows.
    pub async fn execute_sql(&self, sql: &str) -> Result<Vec<JsonValue>> {
        self.executor.run(sql).await
    }

    /// The statement executor backing this client.
    pub fn executor(&self) -> &SqlExecutor {
        &self.executor
    }

    /// The endpoint base URL this client was built with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builder for configuring [`BoticaLinkClient`] instances.
pub struct BoticaLinkClientBuilder {
    base_url: Option<String>,
    auth: AuthProvider,
}

impl BoticaLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            auth: AuthProvider::none(),
        }
    }

    /// Set the endpoint base URL (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<BoticaLinkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| BoticaLinkError::ConfigurationError("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        // Keep-alive pooling; no request timeout. Statement calls wait on
        // the transport default.
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .map_err(|e| BoticaLinkError::ConfigurationError(e.to_string()))?;

        let executor = SqlExecutor::new(base_url.clone(), http_client, self.auth);

        Ok(BoticaLinkClient { base_url, executor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let result = BoticaLinkClient::builder()
            .base_url("http://localhost:54321")
            .auth(AuthProvider::service_key("secret".to_string()))
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_missing_url() {
        let result = BoticaLinkClient::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = BoticaLinkClient::builder()
            .base_url("https://abcdefgh.supabase.co/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://abcdefgh.supabase.co");
    }
}
