pub mod app;
pub mod layout;
pub mod projects;
pub mod routes;
pub mod shared;
pub mod views;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!(
        "api base '{}', feature fetch timeout {:?}",
        shared::config::config().api.base_path,
        shared::config::config().navigation.feature_fetch_timeout()
    );

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
