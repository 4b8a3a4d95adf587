//! Fixtures and an in-memory backend for unit tests.

use std::cell::{Cell, RefCell};

use crate::net::api::Backend;
use crate::net::error::ApiError;
use crate::net::types::{PageMeta, PaginationMeta, Session, Todo, TodoPage, User};
use crate::state::pagination::{Pagination, SortOrder};
use crate::validation::{LoginForm, RegisterForm, TodoDraft};

pub fn session() -> Session {
    Session {
        jwt: "jwt-token".to_owned(),
        user: User {
            id: 7,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            extra: serde_json::Map::new(),
        },
    }
}

pub fn todo(id: i64, title: &str) -> Todo {
    Todo { id, title: title.to_owned(), description: String::new() }
}

/// Backend double holding todos in memory and recording every call.
#[derive(Default)]
pub struct FakeBackend {
    pub todos: RefCell<Vec<Todo>>,
    pub calls: RefCell<Vec<&'static str>>,
    /// When set, every call fails with this error.
    pub fail_with: RefCell<Option<ApiError>>,
    /// Fail `create_todo` once this many creates have succeeded.
    pub fail_create_after: Cell<Option<usize>>,
    next_id: Cell<i64>,
}

impl FakeBackend {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        let backend = Self::default();
        *backend.todos.borrow_mut() = todos;
        backend.next_id.set(next_id);
        backend
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_with.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check_jwt(jwt: &str) -> Result<(), ApiError> {
        if jwt == session().jwt {
            Ok(())
        } else {
            Err(ApiError::Status { status: 401, message: "Missing or invalid credentials".to_owned() })
        }
    }
}

impl Backend for FakeBackend {
    async fn login(&self, form: &LoginForm) -> Result<Session, ApiError> {
        self.record("login")?;
        if form.identifier == "alice@example.com" && form.password == "secret" {
            Ok(session())
        } else {
            Err(ApiError::Status { status: 400, message: "Invalid identifier or password".to_owned() })
        }
    }

    async fn register(&self, _form: &RegisterForm) -> Result<(), ApiError> {
        self.record("register")
    }

    async fn my_todos(&self, jwt: &str) -> Result<Vec<Todo>, ApiError> {
        self.record("my_todos")?;
        Self::check_jwt(jwt)?;
        Ok(self.todos.borrow().clone())
    }

    async fn todos_page(&self, jwt: &str, pagination: &Pagination) -> Result<TodoPage, ApiError> {
        self.record("todos_page")?;
        Self::check_jwt(jwt)?;
        let mut all = self.todos.borrow().clone();
        if pagination.sort == SortOrder::Desc {
            all.reverse();
        }
        let size = pagination.page_size.get() as usize;
        let start = (pagination.page as usize - 1) * size;
        let data: Vec<Todo> = all.iter().skip(start).take(size).cloned().collect();
        let total = all.len() as u64;
        let page_count = u32::try_from(all.len().div_ceil(size)).unwrap_or(u32::MAX);
        Ok(TodoPage {
            data,
            meta: PageMeta {
                pagination: PaginationMeta { page: pagination.page, page_size: pagination.page_size.get(), page_count, total },
            },
        })
    }

    async fn create_todo(&self, jwt: &str, _user_id: i64, draft: &TodoDraft) -> Result<Todo, ApiError> {
        self.record("create_todo")?;
        Self::check_jwt(jwt)?;
        if let Some(limit) = self.fail_create_after.get() {
            if self.calls.borrow().iter().filter(|c| **c == "create_todo").count() > limit {
                return Err(ApiError::Network("connection reset".to_owned()));
            }
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let todo = Todo { id, title: draft.title.clone(), description: draft.description.clone() };
        self.todos.borrow_mut().push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(&self, jwt: &str, id: i64, draft: &TodoDraft) -> Result<Todo, ApiError> {
        self.record("update_todo")?;
        Self::check_jwt(jwt)?;
        let mut todos = self.todos.borrow_mut();
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::Status { status: 404, message: "Not Found".to_owned() })?;
        todo.title.clone_from(&draft.title);
        todo.description.clone_from(&draft.description);
        Ok(todo.clone())
    }

    async fn delete_todo(&self, jwt: &str, id: i64) -> Result<(), ApiError> {
        self.record("delete_todo")?;
        Self::check_jwt(jwt)?;
        let mut todos = self.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(ApiError::Status { status: 404, message: "Not Found".to_owned() });
        }
        Ok(())
    }
}
