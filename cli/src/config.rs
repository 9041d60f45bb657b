//! Configuration file management
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "https://abcdefgh.supabase.co"  # Database endpoint base URL
//!
//! [ui]
//! color = true      # Colored output
//! progress = true   # Progress bar during batch runs
//! ```
//!
//! The service-role key is never read from this file; it is a secret and
//! comes from the environment only (see `connect`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// CLI configuration loaded from TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CLIConfiguration {
    /// Server connection settings
    pub server: Option<ServerConfig>,

    /// UI preferences
    pub ui: Option<UIConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Database endpoint base URL
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Enable the progress bar during batch runs
    #[serde(default = "default_progress")]
    pub progress: bool,
}

fn default_color() -> bool {
    true
}

fn default_progress() -> bool {
    true
}

impl Default for CLIConfiguration {
    fn default() -> Self {
        Self {
            server: None,
            ui: Some(UIConfig {
                color: default_color(),
                progress: default_progress(),
            }),
        }
    }
}

pub fn expand_config_path(path: &Path) -> PathBuf {
    let path_str = path.to_str().unwrap_or("~/.botica/config.toml");
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    path.to_path_buf()
}

impl CLIConfiguration {
    /// Load configuration from file
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded_path = expand_config_path(path);

        if !expanded_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&expanded_path).map_err(|e| {
            crate::error::CLIError::ConfigurationError(format!(
                "Failed to read config file: {}",
                e
            ))
        })?;

        let config: CLIConfiguration = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn resolved_ui(&self) -> UIConfig {
        self.ui.clone().unwrap_or(UIConfig {
            color: default_color(),
            progress: default_progress(),
        })
    }

    /// URL from the `[server]` section, if configured
    pub fn server_url(&self) -> Option<String> {
        self.server.as_ref().and_then(|s| s.url.clone())
    }
}
