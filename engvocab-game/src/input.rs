//! Classification of submitted answers.
use crate::question::normalize_answer;
use once_cell::sync::Lazy;
use regex::Regex;

static LEVEL_SKIP: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^lvl([1-3])$")
        .map_err(|err| log::warn!("level-skip codes disabled: {err}"))
        .ok()
});

/// A normalized answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Debug code jumping straight to a level.
    LevelSkip(u32),
    Answer(String),
}

impl Submission {
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let normalized = normalize_answer(raw);
        if let Some(level) = parse_level_skip(&normalized) {
            return Self::LevelSkip(level);
        }
        Self::Answer(normalized)
    }
}

/// Target level of a `lvl1`..`lvl3` code, if `normalized` is one.
#[must_use]
pub fn parse_level_skip(normalized: &str) -> Option<u32> {
    level_from(LEVEL_SKIP.as_ref(), normalized)
}

/// A missing pattern means no code is ever a level skip.
fn level_from(pattern: Option<&Regex>, normalized: &str) -> Option<u32> {
    pattern?
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .and_then(|digit| digit.as_str().parse().ok())
}
