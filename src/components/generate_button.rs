//! Bulk sample-data button shared by the home list and the paginated page.
//!
//! Both todo scopes are invalidated by `services::todos::generate` as soon as
//! one record is created, so whichever list is on screen refreshes itself.

#[cfg(test)]
#[path = "generate_button_test.rs"]
mod generate_button_test;

use leptos::prelude::*;

use crate::components::session_expiry::use_session_expiry;
use crate::config::GENERATE_COUNT;
use crate::net::api::ApiClient;
use crate::net::query::QueryClient;
use crate::services::{self, todos::GenerateOutcome};
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, Toasts};

fn outcome_toast(outcome: &GenerateOutcome) -> (ToastKind, String) {
    match &outcome.error {
        None => (ToastKind::Success, format!("Generated {} todos", outcome.created)),
        Some(err) => (ToastKind::Error, format!("Generated {} todos, then failed: {err}", outcome.created)),
    }
}

#[component]
pub fn GenerateButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let queries = expect_context::<QueryClient>();
    let api = expect_context::<ApiClient>();
    let generating = RwSignal::new(false);
    let expire = use_session_expiry();

    let on_click = move |_: leptos::ev::MouseEvent| {
        let Some(current) = session.get_untracked().session else {
            return;
        };
        if generating.get_untracked() {
            return;
        }
        generating.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let outcome = services::todos::generate(&api, &current, GENERATE_COUNT, &queries).await;
            generating.set(false);
            if let Some(err) = &outcome.error {
                if outcome.created == 0 && expire.run(err.clone()) {
                    return;
                }
            }
            let (kind, message) = outcome_toast(&outcome);
            toasts.update(|t| {
                t.push(kind, message);
            });
        });
    };

    view! {
        <button class="btn btn--sm btn--outline" disabled=move || generating.get() on:click=on_click>
            {move || if generating.get() { "Generating..." } else { "Generate todos" }}
        </button>
    }
}
