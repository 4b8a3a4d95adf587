//! Modal and draft state for the owned-todo list.
//!
//! DESIGN
//! ======
//! Add, edit and remove share one `updating` flag and follow the same
//! mutation pattern: mark updating, call the backend, close the modal on
//! success, clear updating on every path. Refreshing the list is not this
//! module's job; the mutation raises a cache invalidation instead.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::Todo;
use crate::validation::TodoDraft;

/// Cache scope for the signed-in user's own todo list.
pub const TODO_LIST_SCOPE: &str = "todoList";

/// Which modal, if any, is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TodoModal {
    #[default]
    Closed,
    Add,
    Edit,
    ConfirmRemove,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoEditor {
    pub modal: TodoModal,
    /// Add-form contents.
    pub add_draft: TodoDraft,
    /// Todo being edited or removed.
    pub target: Option<Todo>,
    /// Edit-form contents, seeded from `target`.
    pub edit_draft: TodoDraft,
    pub updating: bool,
    /// Modal and target the running mutation was started from.
    origin: Option<(TodoModal, Option<i64>)>,
}

impl TodoEditor {
    pub fn open_add(&mut self) {
        self.modal = TodoModal::Add;
    }

    pub fn close_add(&mut self) {
        self.add_draft = TodoDraft::default();
        self.modal = TodoModal::Closed;
    }

    pub fn open_edit(&mut self, todo: Todo) {
        self.edit_draft = TodoDraft::from(&todo);
        self.target = Some(todo);
        self.modal = TodoModal::Edit;
    }

    pub fn close_edit(&mut self) {
        self.target = None;
        self.edit_draft = TodoDraft::default();
        self.modal = TodoModal::Closed;
    }

    pub fn open_remove(&mut self, todo: Todo) {
        self.target = Some(todo);
        self.modal = TodoModal::ConfirmRemove;
    }

    pub fn close_remove(&mut self) {
        self.target = None;
        self.modal = TodoModal::Closed;
    }

    pub fn target_id(&self) -> Option<i64> {
        self.target.as_ref().map(|t| t.id)
    }

    /// Mark a mutation as started from the current modal. Returns `false` if
    /// one is already running.
    pub fn begin_update(&mut self) -> bool {
        if self.updating {
            return false;
        }
        self.updating = true;
        self.origin = Some((self.modal, self.target_id()));
        true
    }

    /// Settle the running mutation. On success the modal it started from
    /// closes, but only if that same modal (and target) is still open.
    pub fn finish_update(&mut self, succeeded: bool) {
        let origin = self.origin.take();
        if succeeded && origin == Some((self.modal, self.target_id())) {
            match self.modal {
                TodoModal::Add => self.close_add(),
                TodoModal::Edit => self.close_edit(),
                TodoModal::ConfirmRemove => self.close_remove(),
                TodoModal::Closed => {}
            }
        }
        self.updating = false;
    }
}
