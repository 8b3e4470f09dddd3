//! Question corpus parsing and the built-in fallback pool.
use crate::question::{Question, Tier};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons the corpus text could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("corpus unavailable: {0}")]
    Unavailable(String),
    #[error("corpus request failed: {code} {text}")]
    Status { code: u16, text: String },
    #[error("corpus contained no questions")]
    Empty,
    #[error("corpus read failed: {0}")]
    Io(String),
}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<std::convert::Infallible> for CorpusError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

/// Where the active bank came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankSource {
    Corpus,
    Fallback(CorpusError),
}

impl BankSource {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Result of loading a bank from an optional corpus.
#[derive(Debug, Clone)]
pub struct BankLoad {
    pub bank: QuestionBank,
    pub source: BankSource,
}

/// Questions grouped by difficulty tier, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub beginner: Vec<Question>,
    #[serde(default)]
    pub intermediate: Vec<Question>,
    #[serde(default)]
    pub advanced: Vec<Question>,
}

impl QuestionBank {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Best-effort parse of the line-oriented corpus format.
    ///
    /// Tier headers switch context, data lines split on the first `|`, and
    /// anything else (blank lines, lines without a delimiter, lines before the
    /// first header, empty halves) is dropped without error.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut bank = Self::empty();
        let mut current: Option<Tier> = None;
        let mut skipped = 0_usize;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(tier) = Tier::from_header(trimmed) {
                log::debug!("corpus section {}", tier.header());
                current = Some(tier);
                continue;
            }
            let Some((question, answer)) = line.split_once('|') else {
                skipped += 1;
                continue;
            };
            let question = question.trim();
            let answer = answer.trim();
            match current {
                Some(tier) if !question.is_empty() && !answer.is_empty() => {
                    bank.tier_mut(tier).push(Question::new(question, answer));
                }
                _ => skipped += 1,
            }
        }

        let [beginner, intermediate, advanced] = bank.tier_counts();
        log::info!(
            "parsed corpus: {beginner} beginner, {intermediate} intermediate, {advanced} advanced"
        );
        if skipped > 0 {
            log::debug!("skipped {skipped} malformed corpus lines");
        }
        bank
    }

    /// Build the active bank from a corpus fetch result, substituting the
    /// built-in pool when the corpus is missing or holds no questions.
    #[must_use]
    pub fn from_corpus(result: Result<String, CorpusError>) -> BankLoad {
        let parsed = result.and_then(|text| {
            let bank = Self::parse(&text);
            if bank.is_empty() {
                Err(CorpusError::Empty)
            } else {
                Ok(bank)
            }
        });
        match parsed {
            Ok(bank) => BankLoad {
                bank,
                source: BankSource::Corpus,
            },
            Err(err) => {
                log::warn!("using built-in questions: {err}");
                BankLoad {
                    bank: Self::fallback(),
                    source: BankSource::Fallback(err),
                }
            }
        }
    }

    /// Built-in pool used when the corpus cannot be loaded.
    #[must_use]
    pub fn fallback() -> Self {
        fn pool(pairs: &[(&str, &str)]) -> Vec<Question> {
            pairs
                .iter()
                .map(|(text, answer)| Question::new(*text, *answer))
                .collect()
        }

        Self {
            beginner: pool(&[
                ("What is the opposite of 'big'?", "small"),
                ("What color is the sky?", "blue"),
                ("You use it to write.", "pen"),
                ("What is 2 + 2?", "4"),
                ("What color is grass?", "green"),
                ("You sleep on it.", "bed"),
                ("Not day, but...", "night"),
                ("This animal says 'meow'.", "cat"),
            ]),
            intermediate: pool(&[
                ("What's the opposite of 'early'?", "late"),
                ("Something you type on.", "keyboard"),
                ("It comes after Tuesday.", "wednesday"),
                ("A place full of books.", "library"),
                ("You carry things in it on your back.", "backpack"),
                ("A vehicle with two wheels.", "bicycle"),
                ("Opposite of 'clean'.", "dirty"),
                ("You keep your money in it.", "wallet"),
            ]),
            advanced: pool(&[
                ("A fancy word for 'fake smile'.", "smirk"),
                ("Opposite of 'chaos'.", "order"),
                ("A person who avoids people.", "introvert"),
                ("Extremely boring task.", "tedious"),
                ("A word for excessive pride.", "arrogance"),
                ("Opposite of 'permanent'.", "temporary"),
                ("A person who solves crimes.", "detective"),
                ("Something poisonous.", "toxic"),
            ]),
        }
    }

    #[must_use]
    pub fn questions(&self, tier: Tier) -> &[Question] {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut Vec<Question> {
        match tier {
            Tier::Beginner => &mut self.beginner,
            Tier::Intermediate => &mut self.intermediate,
            Tier::Advanced => &mut self.advanced,
        }
    }

    /// Question counts in `Tier::ALL` order.
    #[must_use]
    pub fn tier_counts(&self) -> [usize; 3] {
        Tier::ALL.map(|tier| self.questions(tier).len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tier_counts().iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
