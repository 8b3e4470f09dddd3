#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod config_tests;
mod fixtures;
mod listener_tests;
mod presenter_tests;
mod scene_tests;
