use engvocab_web::config::{DEFAULT_CORPUS_URL, WebConfig};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn query_values_are_percent_decoded() {
    let config = WebConfig::from_query("?corpus=my%20file.txt&seed=7", 1);
    assert_eq!(config.corpus_url, "my file.txt");
    assert_eq!(config.seed, 7);

    let plus = WebConfig::from_query("?corpus=levels%2Fadv+set.txt", 1);
    assert_eq!(plus.corpus_url, "levels/adv set.txt");
}

#[wasm_bindgen_test]
fn empty_query_keeps_defaults() {
    let config = WebConfig::from_query("", 3);
    assert_eq!(config.corpus_url, DEFAULT_CORPUS_URL);
    assert_eq!(config.seed, 3);
}
