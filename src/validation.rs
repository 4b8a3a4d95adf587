//! Form validation for login, registration and todo drafts.
//!
//! Each form reports at most one message per field: the first rule that
//! fails, checked in declaration order (presence before format/length).
//! Messages are shown inline next to the field; a form with any error is
//! never submitted.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^@ ]+@[^@ ]+\.[^@ .]{2,}$").ok());

/// Field name → message for the first failed rule on that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    fn check(&mut self, field: &'static str, rules: &[(bool, &'static str)]) {
        if let Some((_, message)) = rules.iter().find(|(ok, _)| !ok) {
            self.0.insert(field, *message);
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Login form. The backend calls the email field `identifier`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(
            "identifier",
            &[
                (!self.identifier.is_empty(), "Email is required!"),
                (is_valid_email(&self.identifier), "Not a Valid email address"),
            ],
        );
        errors.check(
            "password",
            &[
                (!self.password.is_empty(), "Password is required!"),
                (char_len(&self.password) >= 5, "password should be at least 5 characters"),
            ],
        );
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(
            "username",
            &[
                (!self.username.is_empty(), "Username is required!"),
                (char_len(&self.username) >= 5, "Username should be at least 5 characters"),
            ],
        );
        errors.check(
            "email",
            &[
                (!self.email.is_empty(), "Email is required!"),
                (is_valid_email(&self.email), "Not a Valid email address"),
            ],
        );
        errors.check(
            "password",
            &[
                (!self.password.is_empty(), "password is required!"),
                (char_len(&self.password) >= 6, "password should be at least 6 characters"),
            ],
        );
        errors.into_result()
    }
}

/// Add/edit todo form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
}

impl TodoDraft {
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check("title", &[(!self.title.trim().is_empty(), "Title is required!")]);
        errors.into_result()
    }
}

impl From<&crate::net::types::Todo> for TodoDraft {
    fn from(todo: &crate::net::types::Todo) -> Self {
        Self { title: todo.title.clone(), description: todo.description.clone() }
    }
}
