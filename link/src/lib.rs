//! # botica-link: Botica database client library
//!
//! Client library for the Botica supply platform's managed database. Wraps
//! the database's SQL-over-HTTPS remote procedure (`exec_sql`) behind a
//! typed client: service-role authentication, one call per statement, and a
//! closed outcome taxonomy for batch tooling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use botica_link::{AuthProvider, BoticaLinkClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BoticaLinkClient::builder()
//!         .base_url("https://abcdefgh.supabase.co")
//!         .auth(AuthProvider::service_key("sb-secret".to_string()))
//!         .build()?;
//!
//!     let rows = client
//!         .execute_sql("SELECT table_name FROM information_schema.tables")
//!         .await?;
//!     println!("{} tables", rows.len());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod exec;
pub mod models;

// Re-export main types for convenience
pub use auth::AuthProvider;
pub use client::BoticaLinkClient;
pub use error::{BoticaLinkError, Result};
pub use exec::{SqlExecutor, StatementExecutor, StatementOutcome};
pub use models::{RpcErrorBody, SqlRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
