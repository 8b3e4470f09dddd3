//! Handle on the JavaScript object that owns sprites, physics and tweens.
//!
//! The page registers it with `registerSceneHost(host)`. Calls go through
//! `Reflect` so a host that lacks a method degrades to a warning.
use crate::dom::js_error_message;
use js_sys::{Array, Function, Reflect};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod method {
    pub const HALT_ACTORS: &str = "haltActors";
    pub const HIDE_ENEMY: &str = "hideEnemy";
    pub const SPAWN_ENEMY: &str = "spawnEnemy";
    pub const SET_LEVEL_LABEL: &str = "setLevelLabel";
    pub const UPDATE_HEALTH: &str = "updateHealth";
    pub const SHOW_BANNER: &str = "showBanner";
    pub const CLEAR_BANNERS: &str = "clearBanners";
    pub const FADE_BANNER: &str = "fadeBanner";
    pub const RESET_SCENE: &str = "resetScene";
    pub const SET_GAMEPLAY_ACTIVE: &str = "setGameplayActive";
    pub const RESIZE: &str = "resize";
    pub const ANIMATE: &str = "animate";
}

#[derive(Clone)]
pub struct SceneHost {
    target: JsValue,
}

impl SceneHost {
    #[must_use]
    pub const fn new(target: JsValue) -> Self {
        Self { target }
    }

    /// Invoke `name` on the host with `args`, logging instead of failing.
    pub fn call(&self, name: &str, args: &[JsValue]) {
        let function = Reflect::get(&self.target, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());
        let Some(function) = function else {
            log::warn!("scene host has no {name}()");
            return;
        };
        let args: Array = args.iter().collect();
        if let Err(err) = function.apply(&self.target, &args) {
            log::warn!("scene host {name}() threw: {}", js_error_message(&err));
        }
    }
}

thread_local! {
    static HOST: RefCell<Option<SceneHost>> = const { RefCell::new(None) };
}

pub fn register(host: SceneHost) {
    HOST.with(|slot| *slot.borrow_mut() = Some(host));
    log::info!("scene host registered");
}

#[must_use]
pub fn is_registered() -> bool {
    HOST.with(|slot| slot.borrow().is_some())
}

/// Call `name` on the registered host, if any.
pub fn call(name: &str, args: &[JsValue]) {
    let host = HOST.with(|slot| slot.borrow().clone());
    match host {
        Some(host) => host.call(name, args),
        None => log::warn!("no scene host registered for {name}()"),
    }
}
