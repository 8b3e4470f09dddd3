//! Run-time settings read from the page URL.
use log::LevelFilter;

pub const DEFAULT_CORPUS_URL: &str = "english_game_questions.txt";
pub const DEFAULT_TICK_MS: i32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub corpus_url: String,
    pub tick_ms: i32,
    pub seed: u64,
    pub log_level: LevelFilter,
}

impl WebConfig {
    /// Build the configuration from a query string such as `?seed=7&debug=1`.
    ///
    /// Keys and values are percent-decoded by the browser's `URLSearchParams`.
    #[must_use]
    pub fn from_query(search: &str, random_seed: u64) -> Self {
        Self::from_pairs(query_pairs(search), random_seed)
    }

    /// Build the configuration from already-decoded query pairs.
    ///
    /// `random_seed` is used when the pairs carry no valid `seed`.
    #[must_use]
    pub fn from_pairs<I>(pairs: I, random_seed: u64) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self {
            corpus_url: DEFAULT_CORPUS_URL.to_string(),
            tick_ms: DEFAULT_TICK_MS,
            seed: random_seed,
            log_level: LevelFilter::Info,
        };

        for (key, value) in pairs {
            match key.as_str() {
                "seed" => match value.parse() {
                    Ok(seed) => config.seed = seed,
                    Err(_) => log::warn!("ignoring invalid seed {value:?}"),
                },
                "debug" if value == "1" => config.log_level = LevelFilter::Debug,
                "corpus" if !value.is_empty() => config.corpus_url = value,
                _ => {}
            }
        }
        config
    }

    /// Configuration for the current page, seeded from `Math.random` unless
    /// the URL pins a seed.
    #[must_use]
    pub fn from_location() -> Self {
        let random_seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        Self::from_query(&crate::dom::location_search(), random_seed)
    }
}

fn query_pairs(search: &str) -> Vec<(String, String)> {
    let params = match web_sys::UrlSearchParams::new_with_str(search) {
        Ok(params) => params,
        Err(err) => {
            log::warn!("ignoring unparsable query {search:?}: {err:?}");
            return Vec::new();
        }
    };
    let Ok(Some(entries)) = js_sys::try_iter(&params) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}
