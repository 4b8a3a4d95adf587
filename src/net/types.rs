//! Wire DTOs for the Strapi-style REST backend.
//!
//! DESIGN
//! ======
//! Response types only name the fields the UI reads. The auth user keeps
//! every other field in a flattened map so the session blob written to
//! `localStorage` is the backend response verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user as returned by `/auth/local`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user id.
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Remaining backend fields (`confirmed`, `blocked`, timestamps, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Session blob persisted under `loggedInUser`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub jwt: String,
    pub user: User,
}

/// A todo record owned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub description: String,
}

/// `GET /users/me?populate=todos` response; only the populated relation is read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeWithTodos {
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// Paginated `GET /todos` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoPage {
    #[serde(default)]
    pub data: Vec<Todo>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Envelope metadata for a paginated collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub pagination: PaginationMeta,
}

/// Server-side pagination counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self { page: 1, page_size: 0, page_count: 0, total: 0 }
    }
}

/// `POST /auth/local` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// `POST /auth/local/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Strapi wraps create/update payloads in `{ "data": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Todo fields sent on create/update. `user` is only set on create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoPayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Vec<i64>>,
}

/// Backend error body: `{ "error": { "status", "name", "message" } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
