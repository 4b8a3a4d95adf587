//! Prev/next pager for the paginated todos page.

#[cfg(test)]
#[path = "paginator_test.rs"]
mod paginator_test;

use leptos::prelude::*;

/// Prev/next availability. Both are disabled while a fetch is in flight.
fn nav_disabled(page: u32, page_count: u32, is_loading: bool) -> (bool, bool) {
    (is_loading || page <= 1, is_loading || page >= page_count)
}

fn page_summary(page: u32, page_count: u32, total: u64) -> String {
    if page_count == 0 {
        return "No records".to_owned();
    }
    let noun = if total == 1 { "record" } else { "records" };
    format!("Page {page} of {page_count} · {total} {noun}")
}

#[component]
pub fn Paginator(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] page_count: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] is_loading: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let disabled = Memo::new(move |_| nav_disabled(page.get(), page_count.get(), is_loading.get()));

    view! {
        <div class="paginator">
            <button
                class="btn btn--sm paginator__prev"
                disabled=move || disabled.get().0
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="paginator__summary">
                {move || page_summary(page.get(), page_count.get(), total.get())}
            </span>
            <button
                class="btn btn--sm paginator__next"
                disabled=move || disabled.get().1
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
