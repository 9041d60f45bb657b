//! Authentication for the Botica SQL RPC endpoint.
//!
//! The managed database expects the service-role secret twice on every
//! request: as an `apikey` header and as an `Authorization: Bearer` token.

/// Credential attached to outgoing RPC requests.
///
/// # Examples
///
/// ```rust
/// use botica_link::AuthProvider;
///
/// // Service-role secret (the normal case for admin tooling)
/// let auth = AuthProvider::service_key("sb-secret-...".to_string());
///
/// // No authentication (local development endpoints only)
/// let auth = AuthProvider::none();
/// ```
#[derive(Debug, Clone)]
pub enum AuthProvider {
    /// Service-role secret key
    ServiceKey(String),

    /// No authentication
    None,
}

impl AuthProvider {
    /// Create service-role authentication
    pub fn service_key(key: String) -> Self {
        Self::ServiceKey(key)
    }

    /// No authentication
    pub fn none() -> Self {
        Self::None
    }

    /// Attach authentication headers to an HTTP request builder.
    ///
    /// - ServiceKey: `apikey: <key>` plus `Authorization: Bearer <key>`
    /// - None: no headers
    pub fn apply_to_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::ServiceKey(key) => request.header("apikey", key).bearer_auth(key),
            Self::None => request,
        }
    }

    /// Check if authentication is configured
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_creation() {
        let key = AuthProvider::service_key("secret".to_string());
        assert!(key.is_authenticated());

        let none = AuthProvider::none();
        assert!(!none.is_authenticated());
    }

    #[test]
    fn test_apply_to_request_builds() {
        let client = reqwest::Client::new();
        let request = client.post("http://localhost:54321/rest/v1/rpc/exec_sql");

        let auth = AuthProvider::service_key("sb-secret".to_string());
        let request = auth.apply_to_request(request);

        let built = request.build().unwrap();
        assert_eq!(built.headers().get("apikey").unwrap(), "sb-secret");
        assert_eq!(
            built.headers().get("authorization").unwrap(),
            "Bearer sb-secret"
        );
    }

    #[test]
    fn test_none_adds_no_headers() {
        let client = reqwest::Client::new();
        let request = client.post("http://localhost:54321/rest/v1/rpc/exec_sql");

        let built = AuthProvider::none().apply_to_request(request).build().unwrap();
        assert!(built.headers().get("apikey").is_none());
        assert!(built.headers().get("authorization").is_none());
    }
}
