//! Client factory: one place where credentials are resolved and injected.
//!
//! Every entry point (batch file, single command, schema inspection) gets
//! its client from here instead of re-deriving credentials itself.
//!
//! Resolution order for the endpoint URL: `--url` flag, then
//! `BOTICA_DB_URL`, then the config file. The service-role key comes only
//! from `BOTICA_SERVICE_ROLE_KEY`, never from a flag or the config file.

use crate::args::Cli;
use botica_cli::{CLIConfiguration, CLIError, Result};
use botica_link::{AuthProvider, BoticaLinkClient};

/// Endpoint base URL environment variable
pub const ENV_DB_URL: &str = "BOTICA_DB_URL";

/// Service-role secret environment variable
pub const ENV_SERVICE_ROLE_KEY: &str = "BOTICA_SERVICE_ROLE_KEY";

/// Build a client from CLI args, environment, and config file.
///
/// Fails before any remote call if either credential is missing.
pub fn create_client(cli: &Cli, config: &CLIConfiguration) -> Result<BoticaLinkClient> {
    let base_url = resolve_base_url(
        cli.url.as_deref(),
        std::env::var(ENV_DB_URL).ok(),
        config,
    )?;
    let service_key = resolve_service_key(std::env::var(ENV_SERVICE_ROLE_KEY).ok())?;

    if cli.verbose {
        eprintln!("Connecting to {}", base_url);
    }

    let client = BoticaLinkClient::builder()
        .base_url(base_url)
        .auth(AuthProvider::service_key(service_key))
        .build()?;

    Ok(client)
}

fn resolve_base_url(
    flag: Option<&str>,
    env: Option<String>,
    config: &CLIConfiguration,
) -> Result<String> {
    flag.map(|s| s.to_string())
        .or(env.filter(|s| !s.trim().is_empty()))
        .or_else(|| config.server_url())
        .ok_or_else(|| {
            CLIError::ConfigurationError(format!(
                "Database URL is not configured. Set {} or pass --url",
                ENV_DB_URL
            ))
        })
}

fn resolve_service_key(env: Option<String>) -> Result<String> {
    env.filter(|s| !s.trim().is_empty()).ok_or_else(|| {
        CLIError::ConfigurationError(format!("{} is not set", ENV_SERVICE_ROLE_KEY))
    })
}
