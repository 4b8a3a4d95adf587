//! Route-guard decision shared by guarded routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages and guest-only pages (login/register) apply the same rule:
//! render when allowed, otherwise replace the current history entry with a
//! redirect to a configured path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Where an unauthenticated visitor to a protected page is sent.
pub const LOGIN_PATH: &str = "/login";

/// Where an authenticated visitor to a guest-only page is sent.
pub const HOME_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(String),
}

impl GuardDecision {
    pub fn evaluate(is_allowed: bool, redirect_path: &str) -> Self {
        if is_allowed {
            Self::Render
        } else {
            Self::Redirect(redirect_path.to_owned())
        }
    }

    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::Render => None,
            Self::Redirect(path) => Some(path),
        }
    }
}
