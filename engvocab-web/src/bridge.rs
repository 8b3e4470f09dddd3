//! The wasm boundary: the single engine instance, the frame clock and the
//! functions exported to the page.
use crate::clock::FrameClock;
use crate::config::WebConfig;
use crate::listeners::SubmitHandler;
use crate::presenter::DomPresenter;
use crate::scene::{self, SceneHost};
use crate::{corpus, dom};
use engvocab_game::{Combatant, GameEngine, ViewportSize};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

type WebEngine = GameEngine<DomPresenter>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("engine is still loading")]
    NotReady,
    #[error("engine is busy")]
    Busy,
    #[error("unknown actor {0:?}")]
    UnknownActor(String),
}

thread_local! {
    static ENGINE: RefCell<Option<WebEngine>> = const { RefCell::new(None) };
}

/// Run `op` against the engine.
///
/// # Errors
/// Returns [`BridgeError::NotReady`] before boot completes and
/// [`BridgeError::Busy`] when called while the engine is already borrowed.
pub fn with_engine<T>(op: impl FnOnce(&mut WebEngine) -> T) -> Result<T, BridgeError> {
    ENGINE.with(|slot| {
        let mut guard = slot.try_borrow_mut().map_err(|_| BridgeError::Busy)?;
        let engine = guard.as_mut().ok_or(BridgeError::NotReady)?;
        Ok(op(engine))
    })
}

fn dispatch(name: &str, op: impl FnOnce(&mut WebEngine)) {
    if let Err(err) = with_engine(op) {
        log::warn!("{name} ignored: {err}");
    }
}

fn submit_handler() -> SubmitHandler {
    Rc::new(|raw: String| dispatch("submit", |engine| engine.submit_answer(&raw)))
}

/// Load the corpus, start a run and begin ticking the clock.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn boot(config: WebConfig) {
    let bank = corpus::load_bank(&config.corpus_url).await;
    log::info!("booting with seed {}", config.seed);

    let mut engine = GameEngine::new(bank, DomPresenter::new(submit_handler()), config.seed);
    engine.start();
    ENGINE.with(|slot| *slot.borrow_mut() = Some(engine));

    if let Err(err) = start_clock(config.tick_ms) {
        log::error!("could not start the game clock: {}", dom::js_error_message(&err));
    }
}

fn start_clock(tick_ms: i32) -> Result<(), JsValue> {
    let window = dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut clock = FrameClock::new();
    clock.elapsed(dom::now_ms());

    let tick = Closure::wrap(Box::new(move || {
        let elapsed = clock.elapsed(dom::now_ms());
        if elapsed == 0 {
            return;
        }
        dispatch("tick", |engine| {
            engine.advance_clock(elapsed);
            engine.presenter_mut().advance_animations(elapsed);
        });
    }) as Box<dyn FnMut()>);

    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        tick_ms,
    )?;
    tick.forget();
    Ok(())
}

/// Register the JavaScript object that renders the scene.
#[wasm_bindgen(js_name = registerSceneHost)]
pub fn register_scene_host(host: JsValue) {
    scene::register(SceneHost::new(host));
}

/// Collision callback from the physics engine, with actor labels.
#[wasm_bindgen(js_name = encounterEnemy)]
pub fn encounter_enemy(a: &str, b: &str) {
    let parsed = Combatant::from_label(a)
        .ok_or_else(|| BridgeError::UnknownActor(a.to_string()))
        .and_then(|a| {
            Combatant::from_label(b)
                .map(|b| (a, b))
                .ok_or_else(|| BridgeError::UnknownActor(b.to_string()))
        });
    match parsed {
        Ok((a, b)) => dispatch("encounterEnemy", |engine| engine.encounter_enemy(a, b)),
        Err(err) => log::warn!("encounterEnemy ignored: {err}"),
    }
}

#[wasm_bindgen(js_name = handleResize)]
#[allow(clippy::cast_possible_truncation)]
pub fn handle_resize(width: f64, height: f64) {
    let size = ViewportSize {
        width: width as f32,
        height: height as f32,
    };
    dispatch("handleResize", |engine| engine.handle_resize(size));
}

#[wasm_bindgen(js_name = setQuestion)]
pub fn set_question(text: &str, answer: &str) {
    dispatch("setQuestion", |engine| engine.set_question(text, answer));
}

#[wasm_bindgen(js_name = resumeGame)]
pub fn resume_game() {
    dispatch("resumeGame", WebEngine::resume_game);
}

#[wasm_bindgen(js_name = restartGame)]
pub fn restart_game() {
    dispatch("restartGame", WebEngine::restart);
}

#[wasm_bindgen(js_name = submitAnswer)]
pub fn submit_answer(raw: &str) {
    dispatch("submitAnswer", |engine| engine.submit_answer(raw));
}

/// Current run state as JSON, or `null` before boot.
#[wasm_bindgen(js_name = gameState)]
#[must_use]
pub fn game_state() -> JsValue {
    with_engine(|engine| serde_json::to_string(engine.state()))
        .ok()
        .and_then(Result::ok)
        .map_or(JsValue::NULL, |json| JsValue::from_str(&json))
}
