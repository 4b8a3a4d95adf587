//! Ends the in-memory session when the backend rejects its token.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::query::QueryClient;
use crate::services;
use crate::state::session::{SessionState, SessionStore};
use crate::state::toast::Toasts;
use crate::util::storage::BrowserStorage;

/// Handler returning `true` if `err` signed the user out. Guarded routes
/// then redirect to the login page on their own.
pub fn use_session_expiry() -> Callback<ApiError, bool> {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let queries = expect_context::<QueryClient>();

    Callback::new(move |err: ApiError| {
        if !session.with_untracked(SessionState::is_authenticated) {
            return false;
        }
        if !services::auth::end_if_unauthorized(&err, &SessionStore::new(BrowserStorage), &queries) {
            return false;
        }
        queries.clear();
        session.set(SessionState::default());
        toasts.update(|t| {
            t.error("Your session has expired. Please log in again.");
        });
        true
    })
}
