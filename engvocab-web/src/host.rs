//! Embedding shim for pages hosted inside Telegram games.
use crate::dom;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const PROXY: &str = "TelegramGameProxy";
const POST_EVENT: &str = "postEvent";
const GAME_LOADED: &str = "GAME_LOADED";

/// Tell an embedding Telegram client that the game finished loading.
///
/// Returns whether a proxy was found. Failures are logged and otherwise ignored.
pub fn notify_game_loaded() -> bool {
    let Some(window) = dom::window() else {
        return false;
    };
    let proxy = Reflect::get(&window, &JsValue::from_str(PROXY)).unwrap_or(JsValue::UNDEFINED);
    if proxy.is_undefined() || proxy.is_null() {
        log::info!("running standalone");
        return false;
    }

    let post_event = Reflect::get(&proxy, &JsValue::from_str(POST_EVENT))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    let Some(post_event) = post_event else {
        log::warn!("{PROXY} has no {POST_EVENT}()");
        return true;
    };
    if let Err(err) = post_event.call3(
        &proxy,
        &JsValue::from_str(GAME_LOADED),
        &Object::new(),
        &JsValue::TRUE,
    ) {
        log::warn!("{PROXY}.{POST_EVENT} failed: {}", dom::js_error_message(&err));
    }
    log::info!("notified {PROXY}");
    true
}
