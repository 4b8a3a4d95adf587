//! Conditional redirect wrapper for guarded routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::util::auth::GuardDecision;

/// Render `children` while `is_allowed` holds; otherwise replace the current
/// history entry with `redirect_path`. Re-evaluates whenever the signal
/// changes, so clearing the session from anywhere redirects immediately.
#[component]
pub fn ProtectedRoute(
    #[prop(into)] is_allowed: Signal<bool>,
    redirect_path: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let decision = Memo::new(move |_| GuardDecision::evaluate(is_allowed.get(), redirect_path));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                let path = decision.with(|d| d.redirect_path().unwrap_or(redirect_path).to_owned());
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=path options=options/> }
            }
        >
            {children()}
        </Show>
    }
}
