//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_host::ToastHost;
use crate::net::api::ApiClient;
use crate::net::query::QueryClient;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage, todos::TodosPage};
use crate::state::session::{SessionState, SessionStore};
use crate::state::toast::Toasts;
use crate::util::auth::{HOME_PATH, LOGIN_PATH};
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Loads the persisted session once, provides the shared contexts and wires
/// each route behind the guard matching its audience.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::from_store(&SessionStore::new(BrowserStorage)));
    let toasts = RwSignal::new(Toasts::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(QueryClient::new());
    let api = ApiClient::default();
    log::debug!("api client ready: base_url={}", api.base_url());
    provide_context(api);

    let signed_in = Signal::derive(move || session.with(SessionState::is_authenticated));
    let signed_out = Signal::derive(move || !signed_in.get());

    view! {
        <Title text="Todo list"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || {
                        view! {
                            <ProtectedRoute is_allowed=signed_in redirect_path=LOGIN_PATH>
                                <HomePage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("todos")
                    view=move || {
                        view! {
                            <ProtectedRoute is_allowed=signed_in redirect_path=LOGIN_PATH>
                                <TodosPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("login")
                    view=move || {
                        view! {
                            <ProtectedRoute is_allowed=signed_out redirect_path=HOME_PATH>
                                <LoginPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=move || {
                        view! {
                            <ProtectedRoute is_allowed=signed_out redirect_path=HOME_PATH>
                                <RegisterPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
            <ToastHost/>
        </Router>
    }
}
