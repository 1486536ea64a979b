// src/bin/hostsim.rs
//! In-memory stand-in for the native bookmark host.
//!
//! Speaks the native-messaging protocol on stdin/stdout: one frame in, one
//! frame out, until EOF. State lives for the lifetime of the process only;
//! integration tests seed it through MARKRELAY_HOSTSIM_SEED and pin the
//! reported version through MARKRELAY_HOSTSIM_VERSION.
use std::collections::BTreeMap;
use std::io::{self, Read, Write};

use serde_json::{json, Value};

use markrelay::domain::bookmark::Bookmark;
use markrelay::domain::error::DomainResult;
use markrelay::domain::protocol::NativeRequest;
use markrelay::infrastructure::transport::framing;

struct Store {
    bookmarks: BTreeMap<i32, Bookmark>,
    next_id: i32,
}

impl Store {
    fn new() -> Self {
        let mut store = Self {
            bookmarks: BTreeMap::new(),
            next_id: 1,
        };

        if let Ok(seed) = std::env::var("MARKRELAY_HOSTSIM_SEED") {
            if let Ok(seeded) = serde_json::from_str::<Vec<Bookmark>>(&seed) {
                for bookmark in seeded {
                    store.add(bookmark);
                }
            }
        }

        store
    }

    fn list(&self) -> Vec<Bookmark> {
        self.bookmarks.values().cloned().collect()
    }

    fn add(&mut self, mut bookmark: Bookmark) -> bool {
        let id = self.next_id;
        self.next_id += 1;
        bookmark.id = Some(id);
        self.bookmarks.insert(id, bookmark);
        true
    }

    // Updates require a known host-assigned id.
    fn update(&mut self, bookmark: Bookmark) -> bool {
        match bookmark.id {
            Some(id) if self.bookmarks.contains_key(&id) => {
                self.bookmarks.insert(id, bookmark);
                true
            }
            _ => false,
        }
    }

    fn delete(&mut self, id: i32) -> bool {
        self.bookmarks.remove(&id).is_some()
    }
}

// Route requests per the method
fn route(store: &mut Store, request: Value) -> Value {
    match serde_json::from_value::<NativeRequest>(request) {
        Ok(NativeRequest::Read) => json!({
            "success": true,
            "bookmarks": store.list(),
        }),
        Ok(NativeRequest::CheckCompatibility) => json!({
            "success": true,
            "binaryVersion": reported_version(),
        }),
        Ok(NativeRequest::Create { bookmark }) => json!({ "success": store.add(bookmark) }),
        Ok(NativeRequest::Update { bookmark }) => json!({ "success": store.update(bookmark) }),
        Ok(NativeRequest::Delete { bookmark_id }) => json!({ "success": store.delete(bookmark_id) }),
        Err(_) => json!({
            "success": false,
            "message": "Unrecognised request type or bad request payload.",
        }),
    }
}

fn reported_version() -> String {
    std::env::var("MARKRELAY_HOSTSIM_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
}

// Answer frames until the peer closes stdin
fn serve<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> DomainResult<()> {
    let mut store = Store::new();

    while let Some(request) = framing::read_message(reader)? {
        let response = route(&mut store, request);
        framing::write_message(writer, &response)?;
    }

    Ok(())
}

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = serve(&mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("hostsim: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markrelay::domain::tag::Tag;

    fn bookmark(url: &str) -> Bookmark {
        Bookmark::new(url, "title", "", Tag::parse_tags("t").unwrap()).unwrap()
    }

    #[test]
    fn given_create_then_read_when_routed_then_bookmark_is_listed() {
        let mut store = Store::new();

        let created = route(
            &mut store,
            serde_json::to_value(NativeRequest::Create {
                bookmark: bookmark("https://example.com"),
            })
            .unwrap(),
        );
        assert_eq!(created["success"], true);

        let listed = route(&mut store, json!({ "method": "GET" }));
        assert_eq!(listed["success"], true);
        assert_eq!(listed["bookmarks"][0]["id"], 1);
    }

    #[test]
    fn given_update_without_id_when_routed_then_unsuccessful() {
        let mut store = Store::new();

        let updated = route(
            &mut store,
            serde_json::to_value(NativeRequest::Update {
                bookmark: bookmark("https://example.com"),
            })
            .unwrap(),
        );
        assert_eq!(updated["success"], false);
    }

    #[test]
    fn given_delete_of_unknown_id_when_routed_then_unsuccessful() {
        let mut store = Store::new();

        let deleted = route(&mut store, json!({ "method": "DELETE", "data": { "bookmark_id": 7 } }));
        assert_eq!(deleted["success"], false);
    }

    #[test]
    fn given_unknown_method_when_routed_then_message_is_reported() {
        let mut store = Store::new();

        let response = route(&mut store, json!({ "method": "PATCH" }));
        assert_eq!(response["success"], false);
        assert!(response["message"].as_str().unwrap().contains("Unrecognised"));
    }
}
