//! Email + password sign-in.
//!
//! DESIGN
//! ======
//! The session is persisted by `services::auth::login` right away, but the
//! in-memory slot is only set after `REDIRECT_DELAY` so the success toast is
//! visible. Setting the slot is what moves the user to `/`: this page is
//! guest-only and its guard redirects as soon as a session appears.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::services::{self, SubmitError};
use crate::state::session::{SessionState, SessionStore};
use crate::state::toast::Toasts;
use crate::util::storage::BrowserStorage;
use crate::validation::{FieldErrors, LoginForm};

/// Build the submitted form. Surrounding whitespace in the email is dropped;
/// the password is sent as typed.
fn login_form(identifier: &str, password: &str) -> LoginForm {
    LoginForm { identifier: identifier.trim().to_owned(), password: password.to_owned() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let api = expect_context::<ApiClient>();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = login_form(&identifier.get_untracked(), &password.get_untracked());
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::default());
        loading.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let store = SessionStore::new(BrowserStorage);
            match services::auth::login(&api, &store, &form).await {
                Ok(signed_in) => {
                    toasts.update(|t| {
                        t.success("Logged in successfully");
                    });
                    #[cfg(feature = "csr")]
                    gloo_timers::future::sleep(crate::config::REDIRECT_DELAY).await;
                    loading.set(false);
                    session.set(SessionState::with_session(signed_in));
                }
                Err(SubmitError::Invalid(invalid)) => {
                    errors.set(invalid);
                    loading.set(false);
                }
                Err(SubmitError::Request(err)) => {
                    toasts.update(|t| {
                        t.error(err.to_string());
                    });
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <main class="page page--auth">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="identifier">"Email"</label>
                    <input
                        class="auth-form__input"
                        id="identifier"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <p class="field-error">{move || errors.with(|e| e.get("identifier"))}</p>
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        class="auth-form__input"
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="field-error">{move || errors.with(|e| e.get("password"))}</p>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <A href="/register">"Register"</A>
                </p>
            </div>
        </main>
    }
}
