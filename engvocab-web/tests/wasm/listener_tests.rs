use crate::fixtures::{html, input, mount_question_box};
use engvocab_web::listeners::{QuestionControls, SUBMIT_BUTTON_ID, SubmitHandler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit};

fn recorder() -> (Rc<RefCell<Vec<String>>>, SubmitHandler) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let handler: SubmitHandler = Rc::new(move |raw| sink.borrow_mut().push(raw));
    (seen, handler)
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keypress", &init)
        .expect("keyboard event");
    input().dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
fn click_and_enter_submit_the_typed_answer() {
    mount_question_box();
    let (seen, handler) = recorder();
    let mut controls = QuestionControls::new();
    controls.bind(&handler);

    input().set_value("Small");
    html(SUBMIT_BUTTON_ID).click();
    press("a");
    press("Enter");

    assert_eq!(*seen.borrow(), vec!["Small".to_string(), "Small".to_string()]);
}

#[wasm_bindgen_test]
fn rebinding_does_not_duplicate_submissions() {
    mount_question_box();
    let (seen, handler) = recorder();
    let mut controls = QuestionControls::new();
    controls.bind(&handler);
    controls.bind(&handler);
    controls.bind(&handler);

    html(SUBMIT_BUTTON_ID).click();
    assert_eq!(seen.borrow().len(), 1);

    controls.teardown();
    assert!(!controls.is_bound());
    html(SUBMIT_BUTTON_ID).click();
    assert_eq!(seen.borrow().len(), 1);
}
