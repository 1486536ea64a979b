// src/application/services/bridge_service_impl.rs
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::application::services::bridge_service::BridgeService;
use crate::domain::bookmark::Bookmark;
use crate::domain::protocol::{
    Ack, BackendResponse, CompatibilityResponse, NativeRequest, ReadResponse,
};
use crate::domain::services::broadcast::FrontendBroadcast;
use crate::domain::services::transport::NativeTransport;
use crate::domain::version;

#[derive(Debug)]
pub struct BridgeServiceImpl {
    transport: Arc<dyn NativeTransport>,
    notifier: Arc<dyn FrontendBroadcast>,
    minimum_host_version: String,
}

impl BridgeServiceImpl {
    pub fn new(
        transport: Arc<dyn NativeTransport>,
        notifier: Arc<dyn FrontendBroadcast>,
        minimum_host_version: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            notifier,
            minimum_host_version: minimum_host_version.into(),
        }
    }

    /// One round trip, decoded into the response shape of the request kind.
    ///
    /// Returns None when the host is unreachable or answers with something
    /// that does not decode; callers map None to their unsuccessful shape.
    fn exchange<R: DeserializeOwned>(&self, request: &NativeRequest) -> Option<R> {
        let value = match self.transport.send(request) {
            Ok(value) => value,
            Err(e) => {
                debug!("Native {} request failed: {}", request.method(), e);
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(response) => Some(response),
            Err(e) => {
                debug!(
                    "Native {} response did not decode: {}",
                    request.method(),
                    e
                );
                None
            }
        }
    }
}

impl BridgeService for BridgeServiceImpl {
    // Ensure the host version is equal to or newer than what we expect,
    // but on the same major version (semantic versioning).
    #[instrument(skip(self), level = "debug")]
    fn check_compatibility(&self) -> bool {
        let response: CompatibilityResponse =
            match self.exchange(&NativeRequest::CheckCompatibility) {
                Some(response) => response,
                None => return false,
            };

        if !response.success {
            return false;
        }

        match response.binary_version.as_deref() {
            Some(observed) if !observed.is_empty() => {
                version::compatible_with_minimum(&self.minimum_host_version, observed)
            }
            _ => false,
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn list_bookmarks(&self) -> ReadResponse {
        self.exchange(&NativeRequest::Read)
            .unwrap_or_else(|| ReadResponse::failure("Native host did not answer"))
    }

    #[instrument(skip(self, bookmark), level = "debug", fields(url = %bookmark.url))]
    fn create_bookmark(&self, bookmark: &Bookmark) -> Ack {
        self.exchange(&NativeRequest::Create {
            bookmark: bookmark.clone(),
        })
        .unwrap_or_else(Ack::failure)
    }

    #[instrument(skip(self, bookmark), level = "debug", fields(id = ?bookmark.id))]
    fn update_bookmark(&self, bookmark: &Bookmark) -> Ack {
        self.exchange(&NativeRequest::Update {
            bookmark: bookmark.clone(),
        })
        .unwrap_or_else(Ack::failure)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_bookmark(&self, bookmark_id: i32) -> Ack {
        self.exchange(&NativeRequest::Delete { bookmark_id })
            .unwrap_or_else(Ack::failure)
    }

    #[instrument(skip(self, response), level = "trace")]
    fn broadcast(&self, response: &BackendResponse) {
        // Fire-and-forget: the notifier contract already swallows delivery
        // failures, nothing is propagated from here either.
        self.notifier.broadcast(response);
    }
}
