//! Landing page for signed-in users.

use leptos::prelude::*;

use crate::components::todo_list::TodoList;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session.with(|s| match s.username() {
            Some(name) => format!("Welcome back, {name}"),
            None => "Welcome".to_owned(),
        })
    };

    view! {
        <main class="page page--home">
            <h1 class="page__title">{greeting}</h1>
            <TodoList/>
        </main>
    }
}
