use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlInputElement, Response, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id and cast it to `T`, logging when it is missing.
#[must_use]
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    let found = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<T>().ok());
    if found.is_none() {
        log::warn!("element #{id} is missing");
    }
    found
}

#[must_use]
pub fn html_element(id: &str) -> Option<HtmlElement> {
    element_by_id::<HtmlElement>(id)
}

#[must_use]
pub fn input_element(id: &str) -> Option<HtmlInputElement> {
    element_by_id::<HtmlInputElement>(id)
}

/// Query string of the current page, including the leading `?`.
#[must_use]
pub fn location_search() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Milliseconds from the page's high resolution clock.
#[must_use]
pub fn now_ms() -> f64 {
    window()
        .and_then(|win| win.performance())
        .map_or_else(js_sys::Date::now, |perf| perf.now())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Show a blocking browser alert. Failures are logged and ignored.
pub fn alert(message: &str) {
    let Some(win) = window() else {
        log::warn!("no window for alert: {message}");
        return;
    };
    if let Err(err) = win.alert_with_message(message) {
        log::warn!("alert failed: {}", js_error_message(&err));
    }
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if no window is available, the fetch request fails, or the response
/// cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body cannot be read or is not a string.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}
