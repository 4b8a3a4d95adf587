//! Submit flows shared by pages.
//!
//! ARCHITECTURE
//! ============
//! Pages own signals and rendering; these functions own the ordering of
//! validate → call backend → persist/invalidate. They are generic over
//! [`Backend`](crate::net::api::Backend) and
//! [`Invalidate`](crate::net::query::Invalidate) so the same code runs
//! against `gloo-net` in the browser and an in-memory fake in tests.

pub mod auth;
pub mod todos;

use crate::net::error::ApiError;
use crate::validation::FieldErrors;

/// Outcome of a form submission that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Rejected locally; nothing was sent.
    #[error("please fix the highlighted fields")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Request(#[from] ApiError),
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Request(_) => None,
        }
    }
}
