use super::*;

fn login(identifier: &str, password: &str) -> LoginForm {
    LoginForm { identifier: identifier.to_owned(), password: password.to_owned() }
}

fn register(username: &str, email: &str, password: &str) -> RegisterForm {
    RegisterForm { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn email_pattern_accepts_common_addresses() {
    assert!(is_valid_email("alice@example.com"));
    assert!(is_valid_email("a.b+tag@mail.example.io"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    assert!(!is_valid_email("alice"));
    assert!(!is_valid_email("alice@example"));
    assert!(!is_valid_email("alice@example.c"));
    assert!(!is_valid_email("al ice@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_valid_form_passes() {
    assert_eq!(login("alice@example.com", "secret").validate(), Ok(()));
}

#[test]
fn login_malformed_email_reports_field_error() {
    let errors = login("not-an-email", "secret").validate().unwrap_err();
    assert_eq!(errors.get("identifier"), Some("Not a Valid email address"));
    assert_eq!(errors.get("password"), None);
}

#[test]
fn login_required_checked_before_format() {
    let errors = login("", "").validate().unwrap_err();
    assert_eq!(errors.get("identifier"), Some("Email is required!"));
    assert_eq!(errors.get("password"), Some("Password is required!"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn login_short_password_rejected() {
    let errors = login("alice@example.com", "1234").validate().unwrap_err();
    assert_eq!(errors.get("password"), Some("password should be at least 5 characters"));
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_valid_form_passes() {
    assert_eq!(register("alice", "alice@example.com", "secret").validate(), Ok(()));
}

#[test]
fn register_reports_each_field_once() {
    let errors = register("bob", "bob@", "12345").validate().unwrap_err();
    assert_eq!(errors.get("username"), Some("Username should be at least 5 characters"));
    assert_eq!(errors.get("email"), Some("Not a Valid email address"));
    assert_eq!(errors.get("password"), Some("password should be at least 6 characters"));
}

#[test]
fn register_empty_fields_report_required() {
    let errors = RegisterForm::default().validate().unwrap_err();
    assert_eq!(errors.get("username"), Some("Username is required!"));
    assert_eq!(errors.get("email"), Some("Email is required!"));
    assert_eq!(errors.get("password"), Some("password is required!"));
}

// =============================================================
// Todo draft
// =============================================================

#[test]
fn todo_draft_requires_non_blank_title() {
    let draft = TodoDraft { title: "   ".to_owned(), description: "d".to_owned() };
    assert_eq!(draft.validate().unwrap_err().get("title"), Some("Title is required!"));
}

#[test]
fn todo_draft_allows_empty_description() {
    let draft = TodoDraft { title: "Ship it".to_owned(), description: String::new() };
    assert_eq!(draft.validate(), Ok(()));
}
