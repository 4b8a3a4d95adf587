//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session blob (`{ user, jwt }`) lives in `localStorage` under
//! `loggedInUser`. [`SessionStore`] owns reads and writes of that blob;
//! [`SessionState`] is the single observable slot pages read from. The app
//! initializes the slot once from storage at startup, login fills it, and
//! logout clears both.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::SESSION_STORAGE_KEY;
use crate::net::types::Session;
use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};

/// Persistence for the session blob.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the stored session. Absent or malformed blobs mean "signed out".
    pub fn load(&self) -> Option<Session> {
        load_json(&self.storage, SESSION_STORAGE_KEY)
    }

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the blob cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        save_json(&self.storage, SESSION_STORAGE_KEY, session)
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_STORAGE_KEY);
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}

/// Observable session slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    pub fn with_session(session: Session) -> Self {
        Self { session: Some(session) }
    }

    /// Initialize from persisted storage.
    pub fn from_store<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        Self { session: store.load() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user.id)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.username.as_str())
    }
}
