// src/domain/protocol.rs
//! Wire shapes for the native-messaging channel.
//!
//! Every request kind has exactly one response shape; payload presence per
//! kind is fixed by the enum variants. The method tags mirror the host's
//! router: GET (read all), OPTIONS (compatibility probe), POST (create),
//! PUT (update), DELETE (remove).
use serde::{Deserialize, Serialize};

use crate::domain::bookmark::Bookmark;

/// Outgoing native request, serialized as `{ "method": ..., "data": ... }`.
///
/// `data` is absent for the two no-payload kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "data")]
pub enum NativeRequest {
    #[serde(rename = "GET")]
    Read,

    #[serde(rename = "OPTIONS")]
    CheckCompatibility,

    #[serde(rename = "POST")]
    Create { bookmark: Bookmark },

    #[serde(rename = "PUT")]
    Update { bookmark: Bookmark },

    #[serde(rename = "DELETE")]
    Delete { bookmark_id: i32 },
}

impl NativeRequest {
    /// The wire method tag for this request.
    pub fn method(&self) -> &'static str {
        match self {
            NativeRequest::Read => "GET",
            NativeRequest::CheckCompatibility => "OPTIONS",
            NativeRequest::Create { .. } => "POST",
            NativeRequest::Update { .. } => "PUT",
            NativeRequest::Delete { .. } => "DELETE",
        }
    }
}

/// Host response to a read request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<Vec<Bookmark>>,
}

impl ReadResponse {
    /// Normalized failure shape used when the host is unreachable or the
    /// response cannot be decoded.
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            bookmarks: None,
        }
    }
}

/// Host response to a compatibility probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(rename = "binaryVersion", default, skip_serializing_if = "Option::is_none")]
    pub binary_version: Option<String>,
}

/// Host response to create, update and delete requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
}

impl Ack {
    pub fn failure() -> Self {
        Self { success: false }
    }
}

/// The shared shape broadcast to other extension surfaces after a native
/// call completes. Delivery is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BackendResponse {
    Bookmarks(ReadResponse),
    Compatibility(CompatibilityResponse),
    Created(Ack),
    Updated(Ack),
    Deleted(Ack),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bookmark::BookmarkBuilder;
    use serde_json::json;

    fn saved_bookmark() -> Bookmark {
        BookmarkBuilder::default()
            .id(Some(3))
            .url("https://example.com")
            .title("Example")
            .build()
            .unwrap()
    }

    #[test]
    fn given_no_payload_requests_when_serialized_then_data_is_absent() {
        let read = serde_json::to_value(NativeRequest::Read).unwrap();
        assert_eq!(read, json!({ "method": "GET" }));

        let options = serde_json::to_value(NativeRequest::CheckCompatibility).unwrap();
        assert_eq!(options, json!({ "method": "OPTIONS" }));
    }

    #[test]
    fn given_create_request_when_serialized_then_bookmark_is_wrapped() {
        let mut bookmark = saved_bookmark();
        bookmark.id = None;

        let value = serde_json::to_value(NativeRequest::Create { bookmark }).unwrap();

        assert_eq!(value["method"], "POST");
        assert_eq!(value["data"]["bookmark"]["url"], "https://example.com");
        assert!(value["data"]["bookmark"].get("id").is_none());
    }

    #[test]
    fn given_update_request_when_serialized_then_saved_bookmark_is_wrapped() {
        let value = serde_json::to_value(NativeRequest::Update {
            bookmark: saved_bookmark(),
        })
        .unwrap();

        assert_eq!(value["method"], "PUT");
        assert_eq!(value["data"]["bookmark"]["id"], 3);
    }

    #[test]
    fn given_delete_request_when_serialized_then_id_is_wrapped() {
        let value = serde_json::to_value(NativeRequest::Delete { bookmark_id: 42 }).unwrap();

        assert_eq!(value, json!({ "method": "DELETE", "data": { "bookmark_id": 42 } }));
    }

    #[test]
    fn given_wire_request_when_deserialized_then_round_trips() {
        let request = NativeRequest::Delete { bookmark_id: 9 };
        let wire = serde_json::to_string(&request).unwrap();
        let back: NativeRequest = serde_json::from_str(&wire).unwrap();

        assert_eq!(back, request);
        assert_eq!(back.method(), "DELETE");
    }

    #[test]
    fn given_response_without_success_field_when_deserialized_then_unsuccessful() {
        let ack: Ack = serde_json::from_value(json!({})).unwrap();
        assert!(!ack.success);

        let read: ReadResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!read.success);
        assert!(read.bookmarks.is_none());
    }

    #[test]
    fn given_compatibility_response_when_deserialized_then_version_is_read() {
        let res: CompatibilityResponse =
            serde_json::from_value(json!({ "success": true, "binaryVersion": "2.5.0" })).unwrap();

        assert!(res.success);
        assert_eq!(res.binary_version.as_deref(), Some("2.5.0"));
    }
}
