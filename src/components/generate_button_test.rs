use super::*;
use crate::net::error::ApiError;

#[test]
fn complete_run_is_a_success_toast() {
    let outcome = GenerateOutcome { created: 100, error: None };
    assert_eq!(outcome_toast(&outcome), (ToastKind::Success, "Generated 100 todos".to_owned()));
}

#[test]
fn interrupted_run_reports_count_and_error() {
    let outcome = GenerateOutcome {
        created: 12,
        error: Some(ApiError::Status { status: 500, message: "boom".to_owned() }),
    };
    assert_eq!(
        outcome_toast(&outcome),
        (ToastKind::Error, "Generated 12 todos, then failed: boom".to_owned())
    );
}
