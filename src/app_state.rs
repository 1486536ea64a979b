// src/app_state.rs
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};
use std::fmt;

use tracing::{debug, instrument};

use crate::config::{load_settings, Settings};
use crate::domain::error::DomainResult;
use crate::domain::services::broadcast::FrontendBroadcast;
use crate::infrastructure::broadcast::ChannelBroadcast;

/// Global AppState ("Service Locator" style)
///
/// Holds configuration plus the long-lived infrastructure services that
/// must be shared process-wide. The broadcast bus lives here because every
/// surface has to subscribe to the same instance.
///
///   read-only access:
///   let app_state = AppState::read_global();
///   let app_name = &app_state.settings.app_name;
///
///   write access:
///   AppState::update_global(AppState::default())?;
pub struct Context {
    pub notifier: Arc<ChannelBroadcast>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("notifier", &"Arc<ChannelBroadcast>")
            .finish()
    }
}

impl Context {
    pub fn new(notifier: Arc<ChannelBroadcast>) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> Arc<dyn FrontendBroadcast> {
        self.notifier.clone()
    }
}

#[derive(Debug)]
pub struct AppState {
    // holds infrastructure-like services
    pub context: Context,
    // holds configuration settings
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::new_with_config_file(None)
    }

    pub fn new_with_config_file(config_file: Option<&Path>) -> Self {
        let settings = load_settings(config_file).unwrap_or_else(|e| {
            debug!("Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        });

        Self {
            context: Context::new(Arc::new(ChannelBroadcast::new())),
            settings,
        }
    }
}

pub static APP_STATE: OnceLock<RwLock<AppState>> = OnceLock::new();

//
// --- Public API for global access ---
impl AppState {
    /// Returns the global AppState lock (initializing if necessary).
    pub fn global() -> &'static RwLock<AppState> {
        APP_STATE.get_or_init(|| RwLock::new(AppState::new()))
    }

    /// Acquire a read guard for the global AppState.
    #[instrument(level = "trace")]
    pub fn read_global() -> std::sync::RwLockReadGuard<'static, AppState> {
        Self::global()
            .read()
            .expect("Failed to acquire read lock for AppState")
    }

    /// Acquire a write guard and replace the global AppState.
    #[instrument(skip(new_state), level = "debug")]
    pub fn update_global(new_state: AppState) -> DomainResult<()> {
        let mut guard = Self::global()
            .write()
            .expect("Failed to acquire write lock for AppState");
        *guard = new_state;
        Ok(())
    }

    /// Re-read settings from config file and environment.
    pub fn reload_settings() -> DomainResult<()> {
        let settings = load_settings(None)?;
        let mut guard = Self::global()
            .write()
            .expect("Failed to acquire write lock for AppState");
        guard.settings = settings;
        Ok(())
    }
}
