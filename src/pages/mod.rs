//! Routed pages. Each one is mounted under a [`ProtectedRoute`] in `app`.
//!
//! [`ProtectedRoute`]: crate::components::protected_route::ProtectedRoute

pub mod home;
pub mod login;
pub mod register;
pub mod todos;
