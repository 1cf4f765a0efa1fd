pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::load_config;

#[wasm_bindgen]
pub fn hydrate() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            // логгер ещё не поднят
            leptos::logging::error!("Invalid embedded config: {:#}", e);
            return;
        }
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();
    log::info!("category admin starting, api base: {}", config.api_base());

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
