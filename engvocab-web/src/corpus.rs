//! Corpus fetch at boot.
use crate::dom;
use engvocab_game::{BankLoad, CorpusError, QuestionBank};

pub const FALLBACK_ALERT: &str = "Failed to load questions file! Using default questions instead.";

/// Fetch the corpus text from `url`.
///
/// # Errors
/// Returns [`CorpusError::Unavailable`] when the request cannot be made or the
/// body cannot be read, and [`CorpusError::Status`] for a non-success response.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_corpus(url: &str) -> Result<String, CorpusError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| CorpusError::Unavailable(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(CorpusError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }
    dom::response_text(&response)
        .await
        .map_err(|err| CorpusError::Unavailable(dom::js_error_message(&err)))
}

/// Fetch and parse the corpus, falling back to the built-in questions and
/// telling the player when that happens.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load_bank(url: &str) -> QuestionBank {
    log::info!("fetching question corpus from {url}");
    let BankLoad { bank, source } = QuestionBank::from_corpus(fetch_corpus(url).await);
    if source.is_fallback() {
        dom::alert(FALLBACK_ALERT);
    }
    bank
}
