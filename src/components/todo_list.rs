//! The signed-in user's own todos with add, edit and remove dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `GET /users/me?populate=todos` through the query cache. Mutations go
//! through `services::todos`, which invalidates the `todoList` scope on
//! success; the list query then re-resolves by itself. This component only
//! manages dialogs, drafts and the shared `updating` flag.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::generate_button::GenerateButton;
use crate::components::modal::Modal;
use crate::components::session_expiry::use_session_expiry;
use crate::net::api::ApiClient;
use crate::net::query::{Query, QueryClient, QueryKey, use_query};
use crate::net::types::Todo;
use crate::services::{self, SubmitError};
use crate::state::session::SessionState;
use crate::state::todos::{TODO_LIST_SCOPE, TodoEditor, TodoModal};
use crate::state::toast::Toasts;
use crate::validation::FieldErrors;

const REMOVE_WARNING: &str = "Deleting this todo removes it permanently. This cannot be undone.";

#[component]
pub fn TodoList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let queries = expect_context::<QueryClient>();
    let api = expect_context::<ApiClient>();

    let editor = RwSignal::new(TodoEditor::default());
    let field_errors = RwSignal::new(FieldErrors::default());
    let expire = use_session_expiry();

    let fetch_api = api.clone();
    let Query { data, .. } = use_query(
        queries,
        move || QueryKey::new(TODO_LIST_SCOPE).with(session.with(|s| s.user_id().unwrap_or_default())),
        move |_key| {
            let api = fetch_api.clone();
            let current = session.get_untracked().session;
            async move {
                match current {
                    Some(current) => services::todos::list_mine(&api, &current).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    Effect::new(move |_| {
        if let Some(Err(err)) = data.get() {
            expire.run(err);
        }
    });

    // Shared tail of every mutation: close on success, surface errors, clear `updating`.
    let settle = move |result: Result<(), SubmitError>, success: &'static str| match result {
        Ok(()) => {
            editor.update(|e| e.finish_update(true));
            field_errors.set(FieldErrors::default());
            toasts.update(|t| {
                t.success(success);
            });
        }
        Err(SubmitError::Invalid(errors)) => {
            field_errors.set(errors);
            editor.update(|e| e.finish_update(false));
        }
        Err(SubmitError::Request(err)) => {
            editor.update(|e| e.finish_update(false));
            if !expire.run(err.clone()) {
                toasts.update(|t| {
                    t.error(err.to_string());
                });
            }
        }
    };

    let submit_add = Callback::new({
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(current) = session.get_untracked().session else {
                return;
            };
            if !editor.try_update(TodoEditor::begin_update).unwrap_or(false) {
                return;
            }
            let draft = editor.with_untracked(|e| e.add_draft.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = services::todos::create(&api, &current, &draft, &queries).await;
                settle(result.map(drop), "Todo added");
            });
        }
    });

    let submit_edit = Callback::new({
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(current) = session.get_untracked().session else {
                return;
            };
            let Some(id) = editor.with_untracked(TodoEditor::target_id) else {
                return;
            };
            if !editor.try_update(TodoEditor::begin_update).unwrap_or(false) {
                return;
            }
            let draft = editor.with_untracked(|e| e.edit_draft.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = services::todos::update(&api, &current, id, &draft, &queries).await;
                settle(result.map(drop), "Todo updated");
            });
        }
    });

    let confirm_remove = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(current) = session.get_untracked().session else {
                return;
            };
            let Some(id) = editor.with_untracked(TodoEditor::target_id) else {
                return;
            };
            if !editor.try_update(TodoEditor::begin_update).unwrap_or(false) {
                return;
            }
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = services::todos::remove(&api, &current, id, &queries).await;
                settle(result.map_err(SubmitError::from), "Todo removed");
            });
        }
    });

    let close_add = Callback::new(move |()| {
        editor.update(TodoEditor::close_add);
        field_errors.set(FieldErrors::default());
    });
    let close_edit = Callback::new(move |()| {
        editor.update(TodoEditor::close_edit);
        field_errors.set(FieldErrors::default());
    });
    let close_remove = Callback::new(move |()| editor.update(TodoEditor::close_remove));

    let is_modal = move |modal: TodoModal| Signal::derive(move || editor.with(|e| e.modal == modal));
    let updating = move || editor.with(|e| e.updating);
    let title_error = move || field_errors.with(|f| f.get("title"));

    view! {
        <section class="todo-list">
            <div class="todo-list__actions">
                <button class="btn btn--sm" on:click=move |_| editor.update(TodoEditor::open_add)>
                    "Post new todo"
                </button>
                <GenerateButton/>
            </div>

            {move || match data.get() {
                None => view! { <TodoSkeletons/> }.into_any(),
                Some(Err(err)) => view! { <p class="todo-list__error">{err.to_string()}</p> }.into_any(),
                Some(Ok(todos)) if todos.is_empty() => {
                    view! { <p class="todo-list__empty">"No todos found"</p> }.into_any()
                }
                Some(Ok(todos)) => {
                    todos
                        .into_iter()
                        .map(|todo| view! { <TodoRow todo=todo editor=editor/> })
                        .collect_view()
                        .into_any()
                }
            }}

            <Modal is_open=is_modal(TodoModal::Add) on_close=close_add title="Add a new todo">
                <form class="dialog__form" on:submit=move |ev| submit_add.run(ev)>
                    <input
                        class="dialog__input"
                        name="title"
                        placeholder="Title"
                        prop:value=move || editor.with(|e| e.add_draft.title.clone())
                        on:input=move |ev| editor.update(|e| e.add_draft.title = event_target_value(&ev))
                    />
                    <p class="field-error">{title_error}</p>
                    <textarea
                        class="dialog__input"
                        name="description"
                        placeholder="Description"
                        prop:value=move || editor.with(|e| e.add_draft.description.clone())
                        on:input=move |ev| editor.update(|e| e.add_draft.description = event_target_value(&ev))
                    ></textarea>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit" disabled=updating>
                            {move || if updating() { "Adding..." } else { "Add" }}
                        </button>
                        <button class="btn btn--cancel" type="button" on:click=move |_| close_add.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Modal>

            <Modal is_open=is_modal(TodoModal::Edit) on_close=close_edit title="Edit this todo">
                <form class="dialog__form" on:submit=move |ev| submit_edit.run(ev)>
                    <input
                        class="dialog__input"
                        name="title"
                        prop:value=move || editor.with(|e| e.edit_draft.title.clone())
                        on:input=move |ev| editor.update(|e| e.edit_draft.title = event_target_value(&ev))
                    />
                    <p class="field-error">{title_error}</p>
                    <textarea
                        class="dialog__input"
                        name="description"
                        prop:value=move || editor.with(|e| e.edit_draft.description.clone())
                        on:input=move |ev| editor.update(|e| e.edit_draft.description = event_target_value(&ev))
                    ></textarea>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit" disabled=updating>
                            {move || if updating() { "Updating..." } else { "Update" }}
                        </button>
                        <button class="btn btn--cancel" type="button" on:click=move |_| close_edit.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Modal>

            <Modal
                is_open=is_modal(TodoModal::ConfirmRemove)
                on_close=close_remove
                title="Are you sure you want to remove this Todo?"
                description=REMOVE_WARNING
            >
                <div class="dialog__actions">
                    <button class="btn btn--danger btn--sm" disabled=updating on:click=move |_| confirm_remove.run(())>
                        {move || if updating() { "Removing..." } else { "Yes, remove" }}
                    </button>
                    <button class="btn btn--cancel btn--sm" type="button" on:click=move |_| close_remove.run(())>
                        "Cancel"
                    </button>
                </div>
            </Modal>
        </section>
    }
}

#[component]
fn TodoRow(todo: Todo, editor: RwSignal<TodoEditor>) -> impl IntoView {
    let title = todo.title.clone();
    let for_edit = todo.clone();
    let for_remove = todo;

    view! {
        <div class="todo-row">
            <p class="todo-row__title">{title}</p>
            <div class="todo-row__actions">
                <button class="btn btn--sm" on:click=move |_| editor.update(|e| e.open_edit(for_edit.clone()))>
                    "Edit"
                </button>
                <button
                    class="btn btn--sm btn--danger"
                    on:click=move |_| editor.update(|e| e.open_remove(for_remove.clone()))
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TodoSkeletons() -> impl IntoView {
    (0..3)
        .map(|_| {
            view! {
                <div class="todo-row todo-row--skeleton" aria-hidden="true">
                    <span class="skeleton skeleton--title"></span>
                    <span class="skeleton skeleton--button"></span>
                    <span class="skeleton skeleton--button"></span>
                </div>
            }
        })
        .collect_view()
}
