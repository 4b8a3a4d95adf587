//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `types` defines the wire schema, `error`
//! is the request failure taxonomy and `query` caches fetched results by key.

pub mod api;
pub mod error;
pub mod query;
pub mod types;
