// tests/test_bridge_service.rs
use std::sync::Arc;

use serde_json::json;

use markrelay::application::services::bridge_service::BridgeService;
use markrelay::application::BridgeServiceImpl;
use markrelay::domain::bookmark::Bookmark;
use markrelay::domain::protocol::{Ack, BackendResponse, ReadResponse};
use markrelay::domain::tag::Tag;
use markrelay::infrastructure::broadcast::ChannelBroadcast;
use markrelay::util::testing::{init_test_env, StubTransport};

const MINIMUM_HOST_VERSION: &str = "2.3.0";

// Helper to build a service over a stubbed transport
fn create_test_service(stub: Arc<StubTransport>) -> (BridgeServiceImpl, Arc<ChannelBroadcast>) {
    init_test_env();
    let bus = Arc::new(ChannelBroadcast::new());
    let service = BridgeServiceImpl::new(stub, bus.clone(), MINIMUM_HOST_VERSION);
    (service, bus)
}

fn unsaved_bookmark() -> Bookmark {
    Bookmark::new(
        "https://example.com",
        "Example",
        "A page",
        Tag::parse_tags("web").unwrap(),
    )
    .unwrap()
}

fn saved_bookmark() -> Bookmark {
    let mut bookmark = unsaved_bookmark();
    bookmark.id = Some(3);
    bookmark
}

#[test]
fn given_compatible_host_when_check_compatibility_then_true() {
    let stub = Arc::new(StubTransport::answering(
        json!({ "success": true, "binaryVersion": "2.5.0" }),
    ));
    let (service, _) = create_test_service(stub.clone());

    assert!(service.check_compatibility());

    let sent = stub.sent_requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], json!({ "method": "OPTIONS" }));
}

#[test]
fn given_equal_minimum_version_when_check_compatibility_then_true() {
    let stub = Arc::new(StubTransport::answering(
        json!({ "success": true, "binaryVersion": "2.3.0" }),
    ));
    let (service, _) = create_test_service(stub);

    assert!(service.check_compatibility());
}

#[test]
fn given_newer_major_version_when_check_compatibility_then_false() {
    let stub = Arc::new(StubTransport::answering(
        json!({ "success": true, "binaryVersion": "3.0.0" }),
    ));
    let (service, _) = create_test_service(stub);

    assert!(!service.check_compatibility());
}

#[test]
fn given_version_below_minimum_when_check_compatibility_then_false() {
    let stub = Arc::new(StubTransport::answering(
        json!({ "success": true, "binaryVersion": "2.1.0" }),
    ));
    let (service, _) = create_test_service(stub);

    assert!(!service.check_compatibility());
}

#[test]
fn given_unsuccessful_response_when_check_compatibility_then_false() {
    let stub = Arc::new(StubTransport::answering(
        json!({ "success": false, "binaryVersion": "2.5.0" }),
    ));
    let (service, _) = create_test_service(stub);

    assert!(!service.check_compatibility());
}

#[test]
fn given_missing_version_when_check_compatibility_then_false() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": true })));
    let (service, _) = create_test_service(stub);

    assert!(!service.check_compatibility());
}

#[test]
fn given_empty_version_when_check_compatibility_then_false() {
    let stub = Arc::new(StubTransport::answering(
        json!({ "success": true, "binaryVersion": "" }),
    ));
    let (service, _) = create_test_service(stub);

    assert!(!service.check_compatibility());
}

#[test]
fn given_unreachable_host_when_check_compatibility_then_false() {
    let stub = Arc::new(StubTransport::unreachable());
    let (service, _) = create_test_service(stub);

    assert!(!service.check_compatibility());
}

#[test]
fn given_host_response_when_list_bookmarks_then_passed_through_unmodified() {
    let payload = json!({
        "success": true,
        "bookmarks": [
            { "id": 1, "url": "https://example.com", "title": "Example", "description": "", "tags": ["web"], "flags": 0 }
        ]
    });
    let stub = Arc::new(StubTransport::answering(payload.clone()));
    let (service, _) = create_test_service(stub.clone());

    let response = service.list_bookmarks();

    let expected: ReadResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response, expected);
    assert_eq!(stub.sent_requests()[0], json!({ "method": "GET" }));
}

#[test]
fn given_unreachable_host_when_list_bookmarks_then_normalized_failure() {
    let stub = Arc::new(StubTransport::unreachable());
    let (service, _) = create_test_service(stub);

    let response = service.list_bookmarks();

    assert!(!response.success);
    assert!(response.message.is_some());
    assert!(response.bookmarks.is_none());
}

#[test]
fn given_create_when_sent_then_bookmark_is_wrapped_under_payload_key() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": true })));
    let (service, _) = create_test_service(stub.clone());

    let ack = service.create_bookmark(&unsaved_bookmark());

    assert!(ack.success);
    let sent = stub.sent_requests();
    assert_eq!(sent[0]["method"], "POST");
    assert_eq!(sent[0]["data"]["bookmark"]["url"], "https://example.com");
    assert!(sent[0]["data"]["bookmark"].get("id").is_none());
}

#[test]
fn given_update_when_sent_then_saved_bookmark_is_wrapped() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": true })));
    let (service, _) = create_test_service(stub.clone());

    let ack = service.update_bookmark(&saved_bookmark());

    assert!(ack.success);
    let sent = stub.sent_requests();
    assert_eq!(sent[0]["method"], "PUT");
    assert_eq!(sent[0]["data"]["bookmark"]["id"], 3);
}

#[test]
fn given_delete_when_sent_then_id_is_wrapped_under_payload_key() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": true })));
    let (service, _) = create_test_service(stub.clone());

    let ack = service.delete_bookmark(42);

    assert!(ack.success);
    assert_eq!(
        stub.sent_requests()[0],
        json!({ "method": "DELETE", "data": { "bookmark_id": 42 } })
    );
}

#[test]
fn given_unsuccessful_ack_when_sent_then_passed_through() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": false })));
    let (service, _) = create_test_service(stub);

    assert!(!service.create_bookmark(&unsaved_bookmark()).success);
    assert!(!service.update_bookmark(&saved_bookmark()).success);
    assert!(!service.delete_bookmark(1).success);
}

#[test]
fn given_malformed_response_when_sent_then_normalized_failure() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": "yes" })));
    let (service, _) = create_test_service(stub);

    assert!(!service.delete_bookmark(1).success);
}

#[test]
fn given_subscriber_when_broadcast_then_response_is_delivered() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": true })));
    let (service, bus) = create_test_service(stub);
    let mut receiver = bus.subscribe();

    let sent = BackendResponse::Created(Ack { success: true });
    service.broadcast(&sent);

    assert_eq!(receiver.try_recv().unwrap(), sent);
}

#[test]
fn given_no_subscribers_when_broadcast_then_resolves_without_error() {
    let stub = Arc::new(StubTransport::answering(json!({ "success": true })));
    let (service, _) = create_test_service(stub);

    // Nothing is listening; the call must still return normally.
    service.broadcast(&BackendResponse::Bookmarks(ReadResponse::failure("boom")));
}
