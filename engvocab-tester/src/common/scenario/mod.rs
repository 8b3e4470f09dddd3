pub mod catalog;

use crate::logic::{AnswerStrategy, SimulationPlan};
use catalog::{
    circular_expectation, cheat_skip_expectation, game_over_expectation, no_repeat_expectation,
    smoke_expectation, victory_expectation,
};

/// Accuracy used by the smoke scenario unless the command line overrides it.
pub const DEFAULT_SMOKE_ACCURACY: u8 = 70;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: SimulationPlan,
}

impl TestScenario {
    #[must_use]
    pub fn simulation(name: impl Into<String>, plan: SimulationPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }

    /// Replace the hit chance of accuracy-driven plans.
    #[must_use]
    pub fn with_accuracy(mut self, percent: u8) -> Self {
        if let AnswerStrategy::Accuracy(_) = self.plan.strategy {
            self.plan.strategy = AnswerStrategy::Accuracy(percent);
        }
        self
    }
}

const SCENARIOS: [(&str, &str); 6] = [
    ("smoke", "Smoke Test"),
    ("victory", "Perfect Run Through Three Levels"),
    ("game-over", "Five Misses End The Run"),
    ("cheat-skip", "Level Skip Code"),
    ("no-repeat", "Non-Repeating Batches"),
    ("circular", "Circular Question Order"),
];

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = name.to_lowercase();
    let (key, title) = SCENARIOS.iter().find(|(candidate, _)| *candidate == key)?;
    let plan = match *key {
        "smoke" => SimulationPlan::new(AnswerStrategy::Accuracy(DEFAULT_SMOKE_ACCURACY))
            .with_max_answers(60)
            .with_expectation(smoke_expectation),
        "victory" => SimulationPlan::new(AnswerStrategy::Perfect)
            .with_stop_at_level(4)
            .with_expectation(victory_expectation),
        "game-over" => {
            SimulationPlan::new(AnswerStrategy::Hopeless).with_expectation(game_over_expectation)
        }
        "cheat-skip" => SimulationPlan::new(AnswerStrategy::Cheater(2))
            .with_stop_at_level(2)
            .with_expectation(cheat_skip_expectation),
        "no-repeat" => SimulationPlan::new(AnswerStrategy::Perfect)
            .with_max_answers(100)
            .with_expectation(no_repeat_expectation),
        "circular" => SimulationPlan::new(AnswerStrategy::Alternating)
            .with_expectation(circular_expectation),
        _ => return None,
    };
    Some(TestScenario::simulation(*title, plan))
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}
