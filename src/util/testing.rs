// src/util/testing.rs

use std::env;
use std::sync::{Mutex, OnceLock};

use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::app_state::AppState;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::protocol::NativeRequest;
use crate::domain::services::transport::NativeTransport;

/// Initializes the global test environment exactly once.
/// - Sets up logging
/// - Resets the global AppState to defaults
pub fn init_test_env() {
    static TEST_ENV: OnceLock<()> = OnceLock::new();

    TEST_ENV.get_or_init(|| {
        setup_test_logging();
        AppState::update_global(AppState::default()).expect("Failed to update global AppState");
        info!("Test environment initialized");
    });
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let noisy_modules = ["tokio", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Saves and restores the MARKRELAY_* environment overrides around a test.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    app_name: Option<String>,
    host_path: Option<String>,
    min_host_version: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            app_name: env::var("MARKRELAY_APP_NAME").ok(),
            host_path: env::var("MARKRELAY_HOST_PATH").ok(),
            min_host_version: env::var("MARKRELAY_MIN_HOST_VERSION").ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var("MARKRELAY_APP_NAME");
        env::remove_var("MARKRELAY_HOST_PATH");
        env::remove_var("MARKRELAY_MIN_HOST_VERSION");
        if let Some(val) = &self.app_name {
            env::set_var("MARKRELAY_APP_NAME", val);
        }
        if let Some(val) = &self.host_path {
            env::set_var("MARKRELAY_HOST_PATH", val);
        }
        if let Some(val) = &self.min_host_version {
            env::set_var("MARKRELAY_MIN_HOST_VERSION", val);
        }
    }
}

/// Transport test double: records every request and answers with a canned
/// value, or fails like an absent host.
#[derive(Debug, Default)]
pub struct StubTransport {
    response: Option<serde_json::Value>,
    requests: Mutex<Vec<serde_json::Value>>,
}

impl StubTransport {
    /// A stub that answers every request with `response`.
    pub fn answering(response: serde_json::Value) -> Self {
        Self {
            response: Some(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A stub behaving like a missing or crashed host.
    pub fn unreachable() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Wire form of every request sent so far, in order.
    pub fn sent_requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().expect("Request log poisoned").clone()
    }
}

impl NativeTransport for StubTransport {
    fn send(&self, request: &NativeRequest) -> DomainResult<serde_json::Value> {
        self.requests
            .lock()
            .expect("Request log poisoned")
            .push(serde_json::to_value(request)?);

        match &self.response {
            Some(value) => Ok(value.clone()),
            None => Err(DomainError::HostUnreachable(
                "Stubbed host is unreachable".to_string(),
            )),
        }
    }
}
