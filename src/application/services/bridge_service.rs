// src/application/services/bridge_service.rs
use std::fmt::Debug;

use crate::domain::bookmark::Bookmark;
use crate::domain::protocol::{Ack, BackendResponse, ReadResponse};

/// Service interface for driving the native bookmark host.
///
/// All operations resolve with a value, they never fail: transport-level
/// problems (host absent, malformed response) degrade to unsuccessful
/// responses. Callers interpret `success == false` as the operation
/// failing and present it to the user.
pub trait BridgeService: Send + Sync + Debug {
    /// Probe the host and check its version against the configured minimum.
    ///
    /// True only when the host answers successfully with a non-empty
    /// version string on the same major version as, and not older than,
    /// the minimum.
    fn check_compatibility(&self) -> bool;

    /// Fetch all bookmarks held by the host.
    fn list_bookmarks(&self) -> ReadResponse;

    /// Save a new bookmark. The bookmark must not carry a host id.
    fn create_bookmark(&self, bookmark: &Bookmark) -> Ack;

    /// Update a saved bookmark in place.
    fn update_bookmark(&self, bookmark: &Bookmark) -> Ack;

    /// Delete a bookmark by its host-assigned id.
    fn delete_bookmark(&self, bookmark_id: i32) -> Ack;

    /// Dispatch a response to other extension surfaces, best-effort.
    fn broadcast(&self, response: &BackendResponse);
}
