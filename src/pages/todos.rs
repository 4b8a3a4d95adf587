//! Paginated, sortable list of every todo visible to the user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GET /todos?pagination[pageSize]=N&pagination[page]=P&sort=createdAt:X`.
//! The query key is derived from [`Pagination`], so changing the page, size or
//! sort is a cache miss and triggers a fetch; invalidating the `todos` scope
//! after a mutation refetches the current page.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use leptos::prelude::*;

use crate::components::generate_button::GenerateButton;
use crate::components::paginator::Paginator;
use crate::components::session_expiry::use_session_expiry;
use crate::net::api::ApiClient;
use crate::net::query::{Query, QueryClient, use_query};
use crate::net::types::{PaginationMeta, Todo, TodoPage};
use crate::services;
use crate::state::pagination::{PageSize, Pagination, SortOrder};
use crate::state::session::SessionState;

fn row_label(todo: &Todo, index: usize) -> String {
    format!("{} - {} - {}", todo.id, index + 1, todo.title)
}

#[component]
pub fn TodosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let queries = expect_context::<QueryClient>();
    let api = expect_context::<ApiClient>();

    let pagination = RwSignal::new(Pagination::default());

    let Query { data, fetching } = use_query(
        queries,
        move || pagination.with(Pagination::query_key),
        move |_key| {
            let api = api.clone();
            let current = session.get_untracked().session;
            let requested = pagination.get_untracked();
            async move {
                match current {
                    Some(current) => services::todos::page(&api, &current, &requested).await,
                    None => Ok(TodoPage::default()),
                }
            }
        },
    );

    // Keep the last known totals while the next page loads.
    let meta = RwSignal::new(PaginationMeta::default());
    let expire = use_session_expiry();
    Effect::new(move |_| match data.get() {
        Some(Ok(page)) => meta.set(page.meta.pagination),
        Some(Err(err)) => {
            expire.run(err);
        }
        None => {}
    });

    let is_loading = Signal::derive(move || data.with(Option::is_none) || fetching.get());
    let on_prev = Callback::new(move |()| pagination.update(Pagination::prev));
    let on_next = Callback::new(move |()| {
        let page_count = meta.with_untracked(|m| m.page_count);
        pagination.update(|p| {
            if p.can_next(page_count) {
                p.next();
            }
        });
    });

    let on_sort = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<SortOrder>() {
            Ok(sort) => pagination.update(|p| p.set_sort(sort)),
            Err(err) => log::warn!("{err}"),
        }
    };
    let on_size = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<PageSize>() {
            Ok(size) => pagination.update(|p| p.set_page_size(size)),
            Err(err) => log::warn!("{err}"),
        }
    };

    view! {
        <main class="page page--todos">
            <h1 class="page__title">"All todos"</h1>
            <div class="todos-toolbar">
                <label class="todos-toolbar__field">
                    "Sort "
                    <select
                        class="todos-toolbar__select"
                        prop:value=move || pagination.with(|p| p.sort.to_string())
                        on:change=on_sort
                    >
                        {SortOrder::ALL
                            .into_iter()
                            .map(|sort| view! { <option value=sort.to_string()>{sort.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="todos-toolbar__field">
                    "Per page "
                    <select
                        class="todos-toolbar__select"
                        prop:value=move || pagination.with(|p| p.page_size.to_string())
                        on:change=on_size
                    >
                        {PageSize::ALL
                            .into_iter()
                            .map(|size| view! { <option value=size.to_string()>{size.get()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <GenerateButton/>
            </div>

            {move || match data.get() {
                None => view! { <p class="todos-page__loading">"Loading..."</p> }.into_any(),
                Some(Err(err)) => view! { <p class="todos-page__error">{err.to_string()}</p> }.into_any(),
                Some(Ok(page)) if page.data.is_empty() => {
                    view! { <p class="todos-page__empty">"No todos found"</p> }.into_any()
                }
                Some(Ok(page)) => {
                    view! {
                        <ul class="todos-page__rows">
                            {page
                                .data
                                .iter()
                                .enumerate()
                                .map(|(index, todo)| view! { <li class="todos-page__row">{row_label(todo, index)}</li> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}

            <Paginator
                page=Signal::derive(move || pagination.with(|p| p.page))
                page_count=Signal::derive(move || meta.with(|m| m.page_count))
                total=Signal::derive(move || meta.with(|m| m.total))
                is_loading=is_loading
                on_prev=on_prev
                on_next=on_next
            />
        </main>
    }
}
