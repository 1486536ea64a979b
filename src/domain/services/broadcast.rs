// src/domain/services/broadcast.rs
use crate::domain::protocol::BackendResponse;

/// Fan-out seam towards other extension surfaces (popup, background page).
///
/// Dispatch is fire-and-forget: implementations must swallow delivery
/// failures, the call itself never fails.
pub trait FrontendBroadcast: Send + Sync + std::fmt::Debug {
    fn broadcast(&self, response: &BackendResponse);
}
