use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::query::{QueryCache, QueryKey};
use crate::test_support::{self, FakeBackend};
use crate::util::auth::{GuardDecision, HOME_PATH};
use crate::util::storage::MemoryStorage;

fn form(identifier: &str, password: &str) -> LoginForm {
    LoginForm { identifier: identifier.to_owned(), password: password.to_owned() }
}

// =============================================================
// login
// =============================================================

#[test]
fn malformed_email_shows_field_error_without_network_call() {
    let backend = FakeBackend::default();
    let store = SessionStore::new(MemoryStorage::new());

    let err = block_on(login(&backend, &store, &form("alice-at-example", "secret"))).unwrap_err();

    let fields = err.field_errors().unwrap();
    assert_eq!(fields.get("identifier"), Some("Not a Valid email address"));
    assert_eq!(backend.call_count(), 0);
    assert_eq!(store.load(), None);
}

#[test]
fn successful_login_persists_session_and_targets_home() {
    let backend = FakeBackend::default();
    let store = SessionStore::new(MemoryStorage::new());

    let session = block_on(login(&backend, &store, &form("alice@example.com", "secret"))).unwrap();

    assert_eq!(session, test_support::session());
    assert!(store.storage().get("loggedInUser").is_some());
    assert_eq!(store.load(), Some(session));

    // Once the slot is filled the login route itself redirects home.
    let signed_in = crate::state::session::SessionState::from_store(&store);
    assert_eq!(
        GuardDecision::evaluate(!signed_in.is_authenticated(), HOME_PATH),
        GuardDecision::Redirect("/".to_owned())
    );
}

#[test]
fn rejected_credentials_surface_backend_message() {
    let backend = FakeBackend::default();
    let store = SessionStore::new(MemoryStorage::new());

    let err = block_on(login(&backend, &store, &form("alice@example.com", "wrong-pass"))).unwrap_err();

    assert_eq!(err.to_string(), "Invalid identifier or password");
    assert_eq!(backend.call_count(), 1);
    assert_eq!(store.load(), None);
}

// =============================================================
// register
// =============================================================

#[test]
fn register_validates_before_calling_backend() {
    let backend = FakeBackend::default();
    let bad = RegisterForm { username: "bob".to_owned(), email: "bob@example.com".to_owned(), password: "secret1".to_owned() };

    let err = block_on(register(&backend, &bad)).unwrap_err();

    assert_eq!(err.field_errors().unwrap().get("username"), Some("Username should be at least 5 characters"));
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn register_propagates_request_errors() {
    let backend = FakeBackend::default();
    *backend.fail_with.borrow_mut() =
        Some(ApiError::Status { status: 400, message: "Email or Username are already taken".to_owned() });
    let ok = RegisterForm {
        username: "bobby".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "secret1".to_owned(),
    };

    let err = block_on(register(&backend, &ok)).unwrap_err();

    assert_eq!(err.to_string(), "Email or Username are already taken");
    assert!(err.field_errors().is_none());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_todo_caches() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&test_support::session()).unwrap();
    let cache = RefCell::new(QueryCache::default());
    cache.borrow_mut().insert(QueryKey::new("todoList"), serde_json::json!([]));
    cache.borrow_mut().insert(QueryKey::new("todos").with(1), serde_json::json!({}));

    logout(&store, &cache);

    assert_eq!(store.load(), None);
    assert!(cache.borrow().is_empty());
}

#[test]
fn rejected_token_ends_session() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&test_support::session()).unwrap();
    let cache = RefCell::new(QueryCache::default());
    cache.borrow_mut().insert(QueryKey::new("todoList"), serde_json::json!([]));

    assert!(end_if_unauthorized(&ApiError::from_status(401, ""), &store, &cache));

    assert_eq!(store.load(), None);
    assert!(cache.borrow().is_empty());
}

#[test]
fn other_failures_keep_session() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&test_support::session()).unwrap();
    let cache = RefCell::new(QueryCache::default());
    cache.borrow_mut().insert(QueryKey::new("todoList"), serde_json::json!([]));

    assert!(!end_if_unauthorized(&ApiError::from_status(404, ""), &store, &cache));
    assert!(!end_if_unauthorized(&ApiError::Network("offline".to_owned()), &store, &cache));

    assert!(store.load().is_some());
    assert_eq!(cache.borrow().len(), 1);
}
