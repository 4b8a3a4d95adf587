//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `pagination`, `todos`, `toast`) so
//! pages and components can depend on small focused models. Each is a plain
//! struct wrapped in an `RwSignal` at the point of use.

pub mod pagination;
pub mod session;
pub mod toast;
pub mod todos;
