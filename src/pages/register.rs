//! Account creation. On success the user is sent to `/login` to sign in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::services::{self, SubmitError};
use crate::state::toast::Toasts;
use crate::util::auth::LOGIN_PATH;
use crate::validation::{FieldErrors, RegisterForm};

fn register_form(username: &str, email: &str, password: &str) -> RegisterForm {
    RegisterForm {
        username: username.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Toasts>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = register_form(&username.get_untracked(), &email.get_untracked(), &password.get_untracked());
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::default());
        loading.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match services::auth::register(&api, &form).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Registered successfully. Please log in.");
                    });
                    #[cfg(feature = "csr")]
                    gloo_timers::future::sleep(crate::config::REDIRECT_DELAY).await;
                    loading.set(false);
                    navigate(LOGIN_PATH, NavigateOptions::default());
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
                <h1 class="auth-card__title">"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        class="auth-form__input"
                        id="username"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <p class="field-error">{move || errors.with(|e| e.get("username"))}</p>
                    <label class="auth-form__label" for="email">"Email"</label>
                    <input
                        class="auth-form__input"
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <p class="field-error">{move || errors.with(|e| e.get("email"))}</p>
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
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </main>
    }
}
