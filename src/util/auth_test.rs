use super::*;
use crate::state::session::SessionState;

#[test]
fn unauthenticated_visit_to_protected_route_redirects_to_login() {
    let state = SessionState::default();
    let decision = GuardDecision::evaluate(state.is_authenticated(), LOGIN_PATH);
    assert_eq!(decision, GuardDecision::Redirect("/login".to_owned()));
    assert_eq!(decision.redirect_path(), Some("/login"));
}

#[test]
fn allowed_visit_renders() {
    let decision = GuardDecision::evaluate(true, LOGIN_PATH);
    assert_eq!(decision, GuardDecision::Render);
    assert_eq!(decision.redirect_path(), None);
}

#[test]
fn guest_only_route_redirects_home_when_signed_in() {
    let state = SessionState::with_session(crate::test_support::session());
    let decision = GuardDecision::evaluate(!state.is_authenticated(), HOME_PATH);
    assert_eq!(decision, GuardDecision::Redirect("/".to_owned()));
}
