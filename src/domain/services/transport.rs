// src/domain/services/transport.rs
use crate::domain::error::DomainResult;
use crate::domain::protocol::NativeRequest;

/*
   Transport seam

   The native host is the system of record for bookmarks; this trait hides
   how a request reaches it (spawned process, test double) behind a single
   request/response exchange:

   Domain-centric: callers speak in request values, not in frames or pipes
   Testability: a stub transport makes bridge behavior fully checkable
   One exchange per call: exactly one response is expected per request
*/
pub trait NativeTransport: Send + Sync + std::fmt::Debug {
    /// Perform one request/response round trip with the native host.
    ///
    /// The raw JSON value is returned so each caller can decode the
    /// response shape that belongs to its request kind.
    fn send(&self, request: &NativeRequest) -> DomainResult<serde_json::Value>;
}
