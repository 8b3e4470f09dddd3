//! Submit-button and Enter-key listeners for the question box.
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement, HtmlInputElement, KeyboardEvent};

pub const QUESTION_BOX_ID: &str = "question-box";
pub const QUESTION_TEXT_ID: &str = "current-question";
pub const ANSWER_INPUT_ID: &str = "answer-input";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";

const CLICK: &str = "click";
const KEYPRESS: &str = "keypress";

/// Receives the raw answer text when the player submits.
pub type SubmitHandler = Rc<dyn Fn(String)>;

#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

struct Bound {
    button: Option<HtmlElement>,
    input: Option<HtmlInputElement>,
    on_click: Closure<dyn FnMut(Event)>,
    on_keypress: Closure<dyn FnMut(KeyboardEvent)>,
}

/// Owns the listener closures so rebinding can remove the previous pair.
#[derive(Default)]
pub struct QuestionControls {
    bound: Option<Bound>,
}

impl QuestionControls {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Attach fresh listeners, removing any attached by an earlier call.
    pub fn bind(&mut self, on_submit: &SubmitHandler) {
        self.teardown();

        let button = dom::html_element(SUBMIT_BUTTON_ID);
        let input = dom::input_element(ANSWER_INPUT_ID);

        let click_submit = Rc::clone(on_submit);
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            click_submit(current_answer());
        }) as Box<dyn FnMut(Event)>);

        let key_submit = Rc::clone(on_submit);
        let on_keypress = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if is_submit_key(&event.key()) {
                event.prevent_default();
                key_submit(current_answer());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if let Some(button) = &button
            && let Err(err) = button
                .add_event_listener_with_callback(CLICK, on_click.as_ref().unchecked_ref())
        {
            log::warn!("could not bind submit button: {}", dom::js_error_message(&err));
        }
        if let Some(input) = &input
            && let Err(err) = input
                .add_event_listener_with_callback(KEYPRESS, on_keypress.as_ref().unchecked_ref())
        {
            log::warn!("could not bind answer input: {}", dom::js_error_message(&err));
        }

        log::debug!("question controls bound");
        self.bound = Some(Bound {
            button,
            input,
            on_click,
            on_keypress,
        });
    }

    /// Remove the listeners attached by the last `bind`.
    pub fn teardown(&mut self) {
        let Some(bound) = self.bound.take() else {
            return;
        };
        if let Some(button) = &bound.button {
            let _ = button.remove_event_listener_with_callback(
                CLICK,
                bound.on_click.as_ref().unchecked_ref(),
            );
        }
        if let Some(input) = &bound.input {
            let _ = input.remove_event_listener_with_callback(
                KEYPRESS,
                bound.on_keypress.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for QuestionControls {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn current_answer() -> String {
    dom::input_element(ANSWER_INPUT_ID)
        .map(|input| input.value())
        .unwrap_or_default()
}
