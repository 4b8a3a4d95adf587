//! Renders the toast queue and auto-dismisses each entry.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, Toasts};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Toasts>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<Toasts>) -> impl IntoView {
    let id = toast.id;
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::config::TOAST_DURATION).await;
        toasts.update(|t| t.dismiss(id));
    });

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    view! {
        <div class=class role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {toast.message}
        </div>
    }
}
