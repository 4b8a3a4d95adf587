//! Top navigation with session-aware links and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::query::QueryClient;
use crate::services;
use crate::state::session::{SessionState, SessionStore};
use crate::state::toast::Toasts;
use crate::util::storage::BrowserStorage;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let queries = expect_context::<QueryClient>();

    let signed_in = move || session.with(SessionState::is_authenticated);
    let username = move || session.with(|s| s.username().unwrap_or_default().to_owned());

    // Clearing the slot is enough: guarded routes redirect on their own.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        services::auth::logout(&SessionStore::new(BrowserStorage), &queries);
        queries.clear();
        session.set(SessionState::default());
        toasts.update(|t| {
            t.success("Logged out successfully");
        });
    };

    view! {
        <nav class="navbar">
            <ul class="navbar__list">
                <li class="navbar__item">
                    <A href="/">"Home"</A>
                </li>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <li class="navbar__item">
                                <A href="/register">"Register"</A>
                            </li>
                            <li class="navbar__item">
                                <A href="/login">"Login"</A>
                            </li>
                        }
                    }
                >
                    <li class="navbar__item">
                        <A href="/todos">"Todos"</A>
                    </li>
                    <li class="navbar__item navbar__user">{username}</li>
                    <li class="navbar__item">
                        <button class="btn btn--sm" on:click=on_logout>
                            "Logout"
                        </button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}
