// src/infrastructure/transport/process.rs
use std::io::BufReader;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::protocol::NativeRequest;
use crate::domain::services::transport::NativeTransport;
use crate::infrastructure::transport::{framing, manifest};

/// Connectionless transport to the native host.
///
/// Mirrors `sendNativeMessage` semantics: every call spawns the host,
/// writes one frame to its stdin, reads one frame from its stdout and lets
/// the host exit on EOF. No state survives between calls; the host owns
/// all persistence.
#[derive(Debug)]
pub struct ProcessTransport {
    app_name: String,
    host_path: Option<PathBuf>,
}

impl ProcessTransport {
    /// `host_path` overrides manifest resolution when set (tilde-expanded).
    pub fn new(app_name: &str, host_path: Option<&str>) -> Self {
        Self {
            app_name: app_name.to_string(),
            host_path: host_path
                .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned())),
        }
    }

    fn resolve_host(&self) -> DomainResult<PathBuf> {
        match &self.host_path {
            Some(path) => Ok(path.clone()),
            None => manifest::resolve_host_path(&self.app_name),
        }
    }

    fn spawn_host(&self, host: &PathBuf) -> DomainResult<Child> {
        Command::new(host)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                DomainError::HostUnreachable(format!("Failed to spawn {:?}: {}", host, e))
            })
    }
}

impl NativeTransport for ProcessTransport {
    #[instrument(skip(self, request), level = "debug", fields(method = request.method()))]
    fn send(&self, request: &NativeRequest) -> DomainResult<serde_json::Value> {
        let host = self.resolve_host()?;
        let mut child = self.spawn_host(&host)?;

        // Pipes exist, we just configured them.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DomainError::HostUnreachable("Host stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| DomainError::HostUnreachable("Host stdout unavailable".to_string()))?;

        framing::write_message(&mut stdin, request)?;
        // Closing stdin signals the host that no further requests follow.
        drop(stdin);

        let response = framing::read_message(&mut BufReader::new(stdout));

        // Reap the host regardless of how the read went.
        match child.wait() {
            Ok(status) => debug!("Host {:?} exited with {}", host, status),
            Err(e) => debug!("Failed to wait on host {:?}: {}", host, e),
        }

        match response? {
            Some(value) => Ok(value),
            None => Err(DomainError::HostUnreachable(
                "Host closed the channel without answering".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_missing_binary_when_send_then_host_unreachable() {
        let transport = ProcessTransport::new(
            "com.markrelay.host",
            Some("/nonexistent/path/to/host-binary"),
        );

        let result = transport.send(&NativeRequest::Read);
        assert!(matches!(result, Err(DomainError::HostUnreachable(_))));
    }

    #[test]
    fn given_tilde_path_when_new_then_expanded() {
        let transport = ProcessTransport::new("com.markrelay.host", Some("~/bin/host"));
        let path = transport.host_path.as_ref().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
