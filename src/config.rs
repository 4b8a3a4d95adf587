//! Build-time configuration and UI timing constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client has no runtime configuration surface. The API base URL is
//! baked in at compile time from `TODO_API_BASE_URL`, falling back to a local
//! Strapi instance.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:1337/api";

/// Raw API base URL as provided at build time.
pub const API_BASE_URL: &str = match option_env!("TODO_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// localStorage key holding the serialized session blob.
pub const SESSION_STORAGE_KEY: &str = "loggedInUser";

/// Delay between a successful login/register and the follow-up navigation.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Number of sample todos created by the "Generate todos" action.
pub const GENERATE_COUNT: usize = 100;

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Build from compile-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self { api_base_url: normalize_base_url(API_BASE_URL) }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Trim whitespace and trailing slashes so endpoint paths can be appended as `/x`.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
