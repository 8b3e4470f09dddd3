use crate::constants::{DEFAULT_QUESTION_ANSWER, DEFAULT_QUESTION_TEXT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quiz prompt and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answer: String,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
        }
    }

    /// Built-in question shown when no batch is available.
    #[must_use]
    pub fn default_prompt() -> Self {
        Self::new(DEFAULT_QUESTION_TEXT, DEFAULT_QUESTION_ANSWER)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Compare an already normalized submission against the stored answer.
    #[must_use]
    pub fn accepts(&self, normalized_input: &str) -> bool {
        normalize_answer(&self.answer) == normalized_input
    }
}

impl Default for Question {
    fn default() -> Self {
        Self::default_prompt()
    }
}

/// Trim and lowercase a raw answer for comparison.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Difficulty tier of a question pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    /// Level 1 is beginner, level 2 intermediate, everything above advanced.
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => Tier::Beginner,
            2 => Tier::Intermediate,
            _ => Tier::Advanced,
        }
    }

    /// Exact corpus header keyword for this tier.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Tier::Beginner => "BEGINNER",
            Tier::Intermediate => "INTERMEDIATE",
            Tier::Advanced => "ADVANCED",
        }
    }

    /// Case-sensitive header match.
    #[must_use]
    pub fn from_header(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.header() == line)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tier::Beginner => 0,
            Tier::Intermediate => 1,
            Tier::Advanced => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_is_a_function_of_level() {
        assert_eq!(Tier::for_level(1), Tier::Beginner);
        assert_eq!(Tier::for_level(2), Tier::Intermediate);
        assert_eq!(Tier::for_level(3), Tier::Advanced);
        assert_eq!(Tier::for_level(12), Tier::Advanced);
    }

    #[test]
    fn headers_are_case_sensitive() {
        assert_eq!(Tier::from_header("ADVANCED"), Some(Tier::Advanced));
        assert_eq!(Tier::from_header("Advanced"), None);
        assert_eq!(Tier::from_header(" BEGINNER"), None);
    }

    #[test]
    fn answers_compare_trimmed_and_lowercased() {
        let question = Question::new("It comes after Tuesday.", "Wednesday");
        assert!(question.accepts(&normalize_answer("  WEDNESDAY ")));
        assert!(!question.accepts(&normalize_answer("thursday")));
    }

    #[test]
    fn default_prompt_is_valid() {
        let question = Question::default();
        assert!(question.is_valid());
        assert_eq!(question.answer, "small");
        assert!(!Question::new("   ", "x").is_valid());
    }
}
