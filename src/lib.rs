//! # todolist-client
//!
//! Leptos + WASM frontend for a personal todo list backed by a remote
//! Strapi-style content API.
//!
//! This crate contains pages, components, application state, the REST client
//! and a small keyed query cache. Browser-only code sits behind the `csr`
//! feature; without it the same modules compile natively so flows can be
//! unit-tested against an in-memory backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
