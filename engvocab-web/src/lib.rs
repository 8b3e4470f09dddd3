#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bridge;
pub mod clock;
pub mod config;
pub mod corpus;
pub mod dom;
pub mod host;
pub mod listeners;
pub mod logging;
pub mod presenter;
pub mod scene;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let config = config::WebConfig::from_location();
    logging::init(config.log_level);
    host::notify_game_loaded();
    wasm_bindgen_futures::spawn_local(bridge::boot(config));
}
