use super::*;

#[test]
fn login_form_trims_identifier_only() {
    let form = login_form("  alice@example.com ", " secret ");
    assert_eq!(form.identifier, "alice@example.com");
    assert_eq!(form.password, " secret ");
}

#[test]
fn malformed_email_fails_before_submission() {
    let form = login_form("alice-at-example", "secret");
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("identifier"), Some("Not a Valid email address"));
    assert_eq!(errors.get("password"), None);
}

#[test]
fn blank_fields_report_required_messages() {
    let errors = login_form("   ", "").validate().unwrap_err();
    assert_eq!(errors.get("identifier"), Some("Email is required!"));
    assert_eq!(errors.get("password"), Some("Password is required!"));
}
