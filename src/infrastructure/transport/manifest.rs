// src/infrastructure/transport/manifest.rs
//! Host manifest lookup.
//!
//! Browsers map a native-messaging application identifier to an executable
//! through a JSON manifest installed per browser. We resolve the host the
//! same way so the relay and the extension address the identical binary.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// The subset of the host manifest we need.
#[derive(Debug, Deserialize)]
pub struct HostManifest {
    pub path: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type", default)]
    pub manifest_type: Option<String>,
}

/// Resolve the executable path registered for `app_name`.
///
/// Probes the known per-user manifest locations in order and returns the
/// first match. A missing manifest means the companion application is not
/// installed for any supported browser.
#[instrument(level = "debug")]
pub fn resolve_host_path(app_name: &str) -> DomainResult<PathBuf> {
    for dir in manifest_dirs() {
        let manifest_path = dir.join(format!("{}.json", app_name));
        if !manifest_path.is_file() {
            continue;
        }

        debug!("Reading host manifest at {:?}", manifest_path);
        let text = std::fs::read_to_string(&manifest_path)?;
        let manifest: HostManifest = serde_json::from_str(&text).map_err(|e| {
            DomainError::HostUnreachable(format!(
                "Host manifest {:?} did not parse: {}",
                manifest_path, e
            ))
        })?;

        return Ok(PathBuf::from(manifest.path));
    }

    Err(DomainError::HostUnreachable(format!(
        "No host manifest found for {}",
        app_name
    )))
}

// Per-user manifest locations for the browsers we care about. System-wide
// locations are intentionally not probed: a user-level relay should talk to
// the user-level host.
fn manifest_dirs() -> Vec<PathBuf> {
    #[allow(unused_mut)]
    let mut candidates = Vec::new();

    #[cfg(target_os = "linux")]
    {
        if let Some(config) = dirs::config_dir() {
            candidates.push(config.join("google-chrome/NativeMessagingHosts"));
            candidates.push(config.join("chromium/NativeMessagingHosts"));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".mozilla/native-messaging-hosts"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            candidates
                .push(home.join("Library/Application Support/Google/Chrome/NativeMessagingHosts"));
            candidates.push(home.join("Library/Application Support/Chromium/NativeMessagingHosts"));
            candidates.push(home.join("Library/Application Support/Mozilla/NativeMessagingHosts"));
        }
    }

    candidates
}
