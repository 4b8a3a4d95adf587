//! Login, registration and logout flows.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::SubmitError;
use super::todos::TODO_SCOPES;
use crate::net::api::Backend;
use crate::net::error::ApiError;
use crate::net::query::Invalidate;
use crate::net::types::Session;
use crate::state::session::SessionStore;
use crate::util::storage::KeyValueStore;
use crate::validation::{LoginForm, RegisterForm};

/// Validate, authenticate and persist the returned session.
///
/// A form that fails validation returns [`SubmitError::Invalid`] without
/// touching the backend. A storage failure is logged but does not fail the
/// login; the session is still returned for the in-memory slot.
///
/// # Errors
///
/// Returns [`SubmitError`] for validation or request failures.
pub async fn login<B: Backend, S: KeyValueStore>(
    backend: &B,
    store: &SessionStore<S>,
    form: &LoginForm,
) -> Result<Session, SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;
    let session = backend.login(form).await?;
    if let Err(err) = store.save(&session) {
        log::warn!("session not persisted: {err}");
    }
    log::info!("signed in: user_id={}", session.user.id);
    Ok(session)
}

/// Validate and create an account. The user signs in separately afterwards.
///
/// # Errors
///
/// Returns [`SubmitError`] for validation or request failures.
pub async fn register<B: Backend>(backend: &B, form: &RegisterForm) -> Result<(), SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;
    backend.register(form).await?;
    log::info!("registered: username={}", form.username);
    Ok(())
}

/// Forget the persisted session and every cached todo result.
pub fn logout<S: KeyValueStore, I: Invalidate>(store: &SessionStore<S>, queries: &I) {
    store.clear();
    queries.invalidate_all(&TODO_SCOPES);
    log::info!("signed out");
}

/// Sign out when `err` means the backend no longer accepts the session
/// (401/403). Returns whether the session was ended.
pub fn end_if_unauthorized<S: KeyValueStore, I: Invalidate>(
    err: &ApiError,
    store: &SessionStore<S>,
    queries: &I,
) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    log::warn!("session rejected by backend: {err}");
    logout(store, queries);
    true
}
