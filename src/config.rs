// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{instrument, trace};

use crate::domain::error::DomainResult;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Native-messaging application identifier of the companion host
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Explicit path to the host binary, bypassing manifest lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_path: Option<String>,

    /// Oldest host version the relay will accept (same major required)
    #[serde(default = "default_minimum_host_version")]
    pub minimum_host_version: String,
}

fn default_app_name() -> String {
    "com.markrelay.host".to_string()
}

fn default_minimum_host_version() -> String {
    "1.0.0".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            host_path: None,
            minimum_host_version: default_minimum_host_version(),
        }
    }
}

// Load settings from config files and environment variables
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    // Start with default settings
    let mut settings = Settings::default();

    // Explicit --config file first, then the standard location
    let config_sources = [
        config_file.map(Path::to_path_buf),
        dirs::home_dir().map(|p| p.join(".config/markrelay/config.toml")),
    ];

    for config_path in config_sources.iter().flatten() {
        if config_path.exists() {
            trace!("Loading config from: {:?}", config_path);

            if let Ok(config_text) = std::fs::read_to_string(config_path) {
                if let Ok(file_settings) = toml::from_str::<Settings>(&config_text) {
                    settings = file_settings;
                    break;
                }
            }
        }
    }

    // Override with environment variables
    if let Ok(app_name) = std::env::var("MARKRELAY_APP_NAME") {
        trace!("Using MARKRELAY_APP_NAME from environment: {}", app_name);
        settings.app_name = app_name;
    }

    if let Ok(host_path) = std::env::var("MARKRELAY_HOST_PATH") {
        trace!("Using MARKRELAY_HOST_PATH from environment: {}", host_path);
        settings.host_path = Some(host_path);
    }

    if let Ok(minimum) = std::env::var("MARKRELAY_MIN_HOST_VERSION") {
        trace!(
            "Using MARKRELAY_MIN_HOST_VERSION from environment: {}",
            minimum
        );
        settings.minimum_host_version = minimum;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

/// Commented template written by `--generate-config`.
pub fn generate_default_config() -> String {
    format!(
        r#"# markrelay configuration
# Location: ~/.config/markrelay/config.toml

# Native-messaging application identifier of the companion host.
# The host binary is located through the browser's host manifest for
# this name unless host_path is set below.
app_name = "{}"

# Uncomment to address the host binary directly (supports ~):
# host_path = "~/.local/bin/bookmark-host"

# Oldest acceptable host version; the major version must match.
minimum_host_version = "{}"
"#,
        default_app_name(),
        default_minimum_host_version()
    )
}
