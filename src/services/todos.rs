//! Todo reads and mutations.
//!
//! Every successful mutation invalidates both todo scopes (the owned list
//! and the paginated list) so any mounted view refetches. Failed mutations
//! invalidate nothing.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use super::SubmitError;
use crate::net::api::Backend;
use crate::net::error::ApiError;
use crate::net::query::Invalidate;
use crate::net::types::{Session, Todo, TodoPage};
use crate::state::pagination::{Pagination, TODOS_PAGE_SCOPE};
use crate::state::todos::TODO_LIST_SCOPE;
use crate::util::sample::sample_draft;
use crate::validation::TodoDraft;

/// Scopes touched by any todo mutation.
pub const TODO_SCOPES: [&str; 2] = [TODO_LIST_SCOPE, TODOS_PAGE_SCOPE];

/// The signed-in user's own todos.
///
/// # Errors
///
/// Propagates the backend failure.
pub async fn list_mine<B: Backend>(backend: &B, session: &Session) -> Result<Vec<Todo>, ApiError> {
    backend.my_todos(&session.jwt).await
}

/// One page of todos in the requested order.
///
/// # Errors
///
/// Propagates the backend failure.
pub async fn page<B: Backend>(backend: &B, session: &Session, pagination: &Pagination) -> Result<TodoPage, ApiError> {
    backend.todos_page(&session.jwt, pagination).await
}

/// # Errors
///
/// Returns [`SubmitError`] for validation or request failures.
pub async fn create<B: Backend, I: Invalidate>(
    backend: &B,
    session: &Session,
    draft: &TodoDraft,
    queries: &I,
) -> Result<Todo, SubmitError> {
    draft.validate().map_err(SubmitError::Invalid)?;
    let todo = backend.create_todo(&session.jwt, session.user.id, draft).await?;
    log::info!("todo created: id={}", todo.id);
    queries.invalidate_all(&TODO_SCOPES);
    Ok(todo)
}

/// # Errors
///
/// Returns [`SubmitError`] for validation or request failures.
pub async fn update<B: Backend, I: Invalidate>(
    backend: &B,
    session: &Session,
    id: i64,
    draft: &TodoDraft,
    queries: &I,
) -> Result<Todo, SubmitError> {
    draft.validate().map_err(SubmitError::Invalid)?;
    let todo = backend.update_todo(&session.jwt, id, draft).await?;
    log::info!("todo updated: id={id}");
    queries.invalidate_all(&TODO_SCOPES);
    Ok(todo)
}

/// # Errors
///
/// Propagates the backend failure.
pub async fn remove<B: Backend, I: Invalidate>(
    backend: &B,
    session: &Session,
    id: i64,
    queries: &I,
) -> Result<(), ApiError> {
    backend.delete_todo(&session.jwt, id).await?;
    log::info!("todo removed: id={id}");
    queries.invalidate_all(&TODO_SCOPES);
    Ok(())
}

/// Result of a bulk sample-data run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub created: usize,
    /// The failure that stopped the run early, if any.
    pub error: Option<ApiError>,
}

/// Create `count` sample todos one after another, stopping at the first failure.
pub async fn generate<B: Backend, I: Invalidate>(
    backend: &B,
    session: &Session,
    count: usize,
    queries: &I,
) -> GenerateOutcome {
    let mut created = 0;
    let mut error = None;
    for n in 1..=count {
        match backend.create_todo(&session.jwt, session.user.id, &sample_draft(n)).await {
            Ok(_) => created += 1,
            Err(err) => {
                log::warn!("sample generation stopped after {created}: {err}");
                error = Some(err);
                break;
            }
        }
    }
    if created > 0 {
        queries.invalidate_all(&TODO_SCOPES);
    }
    GenerateOutcome { created, error }
}
