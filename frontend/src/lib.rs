use leptos::*;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
mod utils;

#[cfg(test)]
mod test_support;

pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::info!("Starting PeopleDesk frontend (wasm)");

    // Resolve runtime config before the first request needs it (non-blocking).
    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
