//! Backdrop dialog shell shared by the add/edit/remove flows.

use leptos::prelude::*;

/// Modal dialog. Clicking the backdrop or pressing Escape calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.run(());
                        }
                    }
                >
                    <h2 class="dialog__title">{title}</h2>
                    {description.map(|text| view! { <p class="dialog__description">{text}</p> })}
                    {children()}
                </div>
            </div>
        </Show>
    }
}
