use engvocab_game::{Banner, CombatPresenter, DisplayCommand};
use engvocab_web::presenter::DomPresenter;
use engvocab_web::scene::{self, SceneHost};
use js_sys::{Array, Function, Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn recording_host() -> (Object, Array) {
    let calls = Array::new();
    let host = Object::new();
    let record = Function::new_with_args(
        "name",
        "return function() { this.calls.push([name].concat(Array.from(arguments))); };",
    );
    Reflect::set(&host, &JsValue::from_str("calls"), &calls).expect("calls");
    for name in ["showBanner", "updateHealth", "resetScene"] {
        let method = record
            .call1(&JsValue::NULL, &JsValue::from_str(name))
            .expect("method");
        Reflect::set(&host, &JsValue::from_str(name), &method).expect("set method");
    }
    (host, calls)
}

#[wasm_bindgen_test]
fn banners_reach_the_scene_host_with_color_and_restart_flag() {
    let (host, calls) = recording_host();
    scene::register(SceneHost::new(host.into()));
    assert!(scene::is_registered());

    let mut presenter = DomPresenter::new(Rc::new(|_raw| {}));
    presenter.apply(&DisplayCommand::ShowBanner {
        banner: Banner::GameOver,
    });
    presenter.apply(&DisplayCommand::HideEnemy);

    assert_eq!(calls.length(), 1);
    let call = Array::from(&calls.get(0));
    assert_eq!(call.get(0).as_string().as_deref(), Some("showBanner"));
    assert_eq!(call.get(1).as_string().as_deref(), Some("game-over"));
    assert_eq!(call.get(3).as_string().as_deref(), Some("#FF0000"));
    assert_eq!(call.get(4).as_bool(), Some(true));
}
