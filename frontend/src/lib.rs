pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Installs logging and the panic hook, starts resolving runtime config,
/// then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already set: {}", err).into());
    }
    log::info!("Starting Residências frontend");

    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    run();
}
