//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation, dialogs and list chrome while reading and
//! writing shared state from Leptos context providers.

pub mod generate_button;
pub mod modal;
pub mod navbar;
pub mod paginator;
pub mod protected_route;
pub mod session_expiry;
pub mod toast_host;
pub mod todo_list;
