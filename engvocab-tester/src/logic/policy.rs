use std::fmt;

use engvocab_game::EncounterState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Answer that never matches a corpus entry, since parsed answers are never empty.
const WRONG_ANSWER: &str = "";

/// Policy interface for automated answering.
pub trait AnswerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Text to type for the question currently shown.
    fn answer(&mut self, state: &EncounterState) -> String;
}

/// Built-in answering strategies for automated runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnswerStrategy {
    Perfect,
    Hopeless,
    /// Wrong, right, wrong, right...
    Alternating,
    /// Correct with the given percentage chance.
    Accuracy(u8),
    /// Type `lvlN` once, then answer perfectly.
    Cheater(u32),
}

impl AnswerStrategy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Hopeless => "Hopeless",
            Self::Alternating => "Alternating",
            Self::Accuracy(_) => "Accuracy",
            Self::Cheater(_) => "Cheater",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn AnswerPolicy> {
        match self {
            Self::Perfect => Box::new(PerfectPolicy),
            Self::Hopeless => Box::new(HopelessPolicy),
            Self::Alternating => Box::new(AlternatingPolicy { next_correct: false }),
            Self::Accuracy(percent) => Box::new(AccuracyPolicy::new(percent, seed)),
            Self::Cheater(target) => Box::new(CheaterPolicy {
                target,
                skipped: false,
            }),
        }
    }
}

impl fmt::Display for AnswerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accuracy(percent) => write!(f, "{} {percent}%", self.label()),
            Self::Cheater(target) => write!(f, "{} lvl{target}", self.label()),
            _ => f.write_str(self.label()),
        }
    }
}

fn correct(state: &EncounterState) -> String {
    state.current_question.answer.clone()
}

struct PerfectPolicy;
struct HopelessPolicy;

struct AlternatingPolicy {
    next_correct: bool,
}

struct AccuracyPolicy {
    probability: f64,
    rng: ChaCha20Rng,
}

impl AccuracyPolicy {
    fn new(percent: u8, seed: u64) -> Self {
        Self {
            probability: f64::from(percent.min(100)) / 100.0,
            rng: ChaCha20Rng::seed_from_u64(seed ^ 0xA11C_E5ED),
        }
    }
}

struct CheaterPolicy {
    target: u32,
    skipped: bool,
}

impl AnswerPolicy for PerfectPolicy {
    fn name(&self) -> &'static str {
        "perfect"
    }

    fn answer(&mut self, state: &EncounterState) -> String {
        correct(state)
    }
}

impl AnswerPolicy for HopelessPolicy {
    fn name(&self) -> &'static str {
        "hopeless"
    }

    fn answer(&mut self, _state: &EncounterState) -> String {
        WRONG_ANSWER.to_string()
    }
}

impl AnswerPolicy for AlternatingPolicy {
    fn name(&self) -> &'static str {
        "alternating"
    }

    fn answer(&mut self, state: &EncounterState) -> String {
        let answer = if self.next_correct {
            correct(state)
        } else {
            WRONG_ANSWER.to_string()
        };
        self.next_correct = !self.next_correct;
        answer
    }
}

impl AnswerPolicy for AccuracyPolicy {
    fn name(&self) -> &'static str {
        "accuracy"
    }

    fn answer(&mut self, state: &EncounterState) -> String {
        if self.rng.gen_bool(self.probability) {
            correct(state)
        } else {
            WRONG_ANSWER.to_string()
        }
    }
}

impl AnswerPolicy for CheaterPolicy {
    fn name(&self) -> &'static str {
        "cheater"
    }

    fn answer(&mut self, state: &EncounterState) -> String {
        if self.skipped {
            correct(state)
        } else {
            self.skipped = true;
            format!("LVL{}", self.target)
        }
    }
}
