use std::sync::Arc;

use super::*;
use crate::config::StorageKeys;
use crate::state::session::{CredentialStore, SessionError};
use crate::util::storage::{MemoryStorage, SharedStorage};

fn dispatcher() -> (Dispatcher, SharedStore) {
    let storage: SharedStorage = Arc::new(MemoryStorage::new());
    let store = Arc::new(CredentialStore::new(storage, StorageKeys::default()));
    (Dispatcher::new("api/", store.clone()), store)
}

// =============================================================
// build
// =============================================================

#[test]
fn build_prefixes_path() {
    let (dispatcher, _) = dispatcher();
    let req = dispatcher.build(Method::Get, "users", None).unwrap();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "api/users");
    assert_eq!(req.body, None);
}

#[test]
fn build_anonymous_has_no_authorization_header() {
    let (dispatcher, _) = dispatcher();
    let req = dispatcher.build(Method::Get, "sensors", None).unwrap();
    assert!(req.headers.is_empty());
    assert_eq!(req.header(AUTHORIZATION_HEADER), None);
}

#[test]
fn build_attaches_current_token() {
    let (dispatcher, store) = dispatcher();
    store.set("h.c.s", false, "Joao").unwrap();

    let body = serde_json::json!({ "quota": 12.5 });
    let req = dispatcher.build(Method::Post, "users/pk/update", Some(body.clone())).unwrap();
    assert_eq!(req.header("authorization"), Some("h.c.s"));
    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.body, Some(body));
}

#[test]
fn build_drops_header_after_logout() {
    let (dispatcher, store) = dispatcher();
    store.set("h.c.s", true, "Maria").unwrap();
    store.clear().unwrap();

    let req = dispatcher.build(Method::Put, "sensors/1", None).unwrap();
    assert_eq!(req.header(AUTHORIZATION_HEADER), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn build_surfaces_storage_failure() {
    let storage: SharedStorage = Arc::new(crate::util::storage::BrowserStorage);
    let store = Arc::new(CredentialStore::new(storage, StorageKeys::default()));
    let dispatcher = Dispatcher::new("api/", store);

    assert!(matches!(
        dispatcher.build(Method::Get, "users", None),
        Err(RequestError::Session(SessionError::StorageUnavailable(_)))
    ));
}

// =============================================================
// helpers
// =============================================================

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
}

#[test]
fn parse_body_empty_is_null() {
    assert_eq!(parse_body("  ").unwrap(), serde_json::Value::Null);
}

#[test]
fn parse_body_rejects_non_json() {
    assert!(matches!(parse_body("<html>"), Err(RequestError::Decode(_))));
}

#[test]
fn decode_reports_shape_mismatch() {
    let result: Result<LoginResponse, _> = decode(serde_json::json!({ "nope": 1 }));
    assert!(matches!(result, Err(RequestError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_outside_browser_is_unavailable() {
    let (dispatcher, _) = dispatcher();
    let result = block_on_ready(dispatcher.send(Method::Get, "users", None));
    assert_eq!(result, Err(RequestError::Unavailable));
}

/// Poll a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future suspended"),
    }
}
