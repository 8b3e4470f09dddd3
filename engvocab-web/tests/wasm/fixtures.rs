use engvocab_web::dom;
use engvocab_web::listeners::{
    ANSWER_INPUT_ID, QUESTION_BOX_ID, QUESTION_TEXT_ID, SUBMIT_BUTTON_ID,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

/// Recreate the question box markup the host page provides.
pub fn mount_question_box() {
    let doc = dom::document().expect("document");
    if let Some(existing) = doc.get_element_by_id(QUESTION_BOX_ID) {
        existing.remove();
    }
    let question_box = doc.create_element("div").expect("create box");
    question_box.set_id(QUESTION_BOX_ID);
    question_box.set_inner_html(&format!(
        "<p id=\"{QUESTION_TEXT_ID}\"></p><input id=\"{ANSWER_INPUT_ID}\"><button id=\"{SUBMIT_BUTTON_ID}\">OK</button>"
    ));
    doc.body()
        .expect("body")
        .append_child(&question_box)
        .expect("append box");
}

pub fn html(id: &str) -> HtmlElement {
    dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("element present")
}

pub fn input() -> HtmlInputElement {
    html(ANSWER_INPUT_ID)
        .dyn_into::<HtmlInputElement>()
        .expect("input element")
}
