//! Client-side rendering entry point.

#[cfg(feature = "csr")]
fn main() {
    use todolist_client::app::App;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("todolist client starting; api={}", todolist_client::config::API_BASE_URL);
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("todolist-client renders in the browser; build with `--features csr` (e.g. `trunk serve`)");
}
