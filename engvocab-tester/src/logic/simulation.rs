use std::sync::Arc;

use anyhow::Result;
use engvocab_game::{
    Banner, Combatant, DisplayCommand, EncounterMachine, EncounterPhase, EncounterState,
    QuestionBank, Submission, Tier, normalize_answer,
};
use rand_chacha::ChaCha20Rng;

use crate::logic::policy::AnswerStrategy;

/// Longest stretch of virtual time a level transition may take before the
/// run is considered stuck.
const SETTLE_LIMIT_MS: u64 = 60_000;

pub type Expectation = fn(&SimulationSummary) -> Result<()>;

/// What to play and what must hold afterwards.
#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub strategy: AnswerStrategy,
    pub max_answers: usize,
    /// Stop once this level has been reached and an encounter is open.
    pub stop_at_level: Option<u32>,
    pub expectations: Vec<Expectation>,
}

impl SimulationPlan {
    #[must_use]
    pub const fn new(strategy: AnswerStrategy) -> Self {
        Self {
            strategy,
            max_answers: 200,
            stop_at_level: None,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_max_answers(mut self, max_answers: usize) -> Self {
        self.max_answers = max_answers;
        self
    }

    #[must_use]
    pub fn with_stop_at_level(mut self, level: u32) -> Self {
        self.stop_at_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

/// A batch drawn for a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    pub level: u32,
    pub texts: Vec<String>,
}

impl BatchRecord {
    #[must_use]
    pub const fn tier(&self) -> Tier {
        Tier::for_level(self.level)
    }
}

/// A submitted answer and the question it was typed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub level: u32,
    pub question: String,
    pub submitted: String,
    pub correct: bool,
    pub level_skip: bool,
}

#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub seed: u64,
    pub strategy: AnswerStrategy,
    pub tier_sizes: [usize; 3],
    pub batches: Vec<BatchRecord>,
    pub answers: Vec<AnswerRecord>,
    pub banners: Vec<Banner>,
    pub player_hits: usize,
    pub enemy_hits: usize,
    pub final_state: EncounterState,
    pub stuck: bool,
}

impl SimulationSummary {
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.final_state.is_over()
    }

    #[must_use]
    pub fn victories(&self) -> usize {
        self.banners
            .iter()
            .filter(|banner| matches!(banner, Banner::Victory))
            .count()
    }

    #[must_use]
    pub fn ending_label(&self) -> &'static str {
        if self.stuck {
            "stuck"
        } else if self.game_over() {
            "game over"
        } else {
            "halted"
        }
    }
}

/// Plays encounter machines headlessly against a shared bank.
#[derive(Debug, Clone)]
pub struct GameTester {
    bank: Arc<QuestionBank>,
    verbose: bool,
}

impl GameTester {
    #[must_use]
    pub const fn new(bank: Arc<QuestionBank>, verbose: bool) -> Self {
        Self { bank, verbose }
    }

    #[must_use]
    pub fn run_plan(&self, plan: &SimulationPlan, seed: u64) -> SimulationSummary {
        let mut machine: EncounterMachine<ChaCha20Rng> =
            EncounterMachine::seeded(QuestionBank::clone(&self.bank), seed);
        let mut policy = plan.strategy.create_policy(seed);
        let mut run = RunLog::new(seed, plan.strategy, &self.bank);

        let commands = machine.start();
        run.observe(&machine, &commands);

        while run.answers.len() < plan.max_answers {
            let commands = machine.settle(SETTLE_LIMIT_MS);
            run.observe(&machine, &commands);

            let state = machine.state();
            if state.phase != EncounterPhase::Questioning {
                run.stuck = !state.is_over();
                break;
            }
            if plan
                .stop_at_level
                .is_some_and(|level| state.current_level >= level)
            {
                break;
            }

            let submitted = policy.answer(state);
            let normalized = normalize_answer(&submitted);
            let record = AnswerRecord {
                level: state.current_level,
                question: state.current_question.text.clone(),
                correct: state.current_question.accepts(&normalized),
                level_skip: matches!(Submission::classify(&submitted), Submission::LevelSkip(_)),
                submitted,
            };
            if self.verbose {
                log::debug!(
                    "[{}] level {} {:?} -> {:?}",
                    policy.name(),
                    record.level,
                    record.question,
                    record.submitted
                );
            }

            let commands = machine.submit_answer(&record.submitted);
            run.answers.push(record);
            run.observe(&machine, &commands);
        }

        let commands = machine.settle(SETTLE_LIMIT_MS);
        run.observe(&machine, &commands);
        run.finish(machine.state().clone())
    }
}

struct RunLog {
    seed: u64,
    strategy: AnswerStrategy,
    tier_sizes: [usize; 3],
    batches: Vec<BatchRecord>,
    answers: Vec<AnswerRecord>,
    banners: Vec<Banner>,
    player_hits: usize,
    enemy_hits: usize,
    stuck: bool,
}

impl RunLog {
    fn new(seed: u64, strategy: AnswerStrategy, bank: &QuestionBank) -> Self {
        Self {
            seed,
            strategy,
            tier_sizes: bank.tier_counts(),
            batches: Vec::new(),
            answers: Vec::new(),
            banners: Vec::new(),
            player_hits: 0,
            enemy_hits: 0,
            stuck: false,
        }
    }

    fn observe(&mut self, machine: &EncounterMachine<ChaCha20Rng>, commands: &[DisplayCommand]) {
        for command in commands {
            match command {
                DisplayCommand::ShowBanner { banner } => self.banners.push(*banner),
                DisplayCommand::PlayAttack { attacker } => match attacker {
                    Combatant::Player => self.player_hits += 1,
                    Combatant::Enemy => self.enemy_hits += 1,
                },
                DisplayCommand::BindQuestionControls => {
                    let state = machine.state();
                    self.batches.push(BatchRecord {
                        level: state.current_level,
                        texts: state
                            .current_level_questions
                            .iter()
                            .map(|question| question.text.clone())
                            .collect(),
                    });
                }
                _ => {}
            }
        }
    }

    fn finish(self, final_state: EncounterState) -> SimulationSummary {
        SimulationSummary {
            seed: self.seed,
            strategy: self.strategy,
            tier_sizes: self.tier_sizes,
            batches: self.batches,
            answers: self.answers,
            banners: self.banners,
            player_hits: self.player_hits,
            enemy_hits: self.enemy_hits,
            final_state,
            stuck: self.stuck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tester() -> GameTester {
        GameTester::new(Arc::new(QuestionBank::fallback()), false)
    }

    #[test]
    fn hopeless_run_ends_after_five_answers() {
        let summary = tester().run_plan(&SimulationPlan::new(AnswerStrategy::Hopeless), 7);
        assert!(summary.game_over());
        assert_eq!(summary.answers.len(), 5);
        assert_eq!(summary.enemy_hits, 5);
        assert_eq!(summary.banners.last(), Some(&Banner::GameOver));
        assert_eq!(summary.ending_label(), "game over");
    }

    #[test]
    fn perfect_run_stops_at_requested_level() {
        let plan = SimulationPlan::new(AnswerStrategy::Perfect).with_stop_at_level(3);
        let summary = tester().run_plan(&plan, 7);
        assert_eq!(summary.final_state.current_level, 3);
        assert_eq!(summary.victories(), 2);
        assert_eq!(summary.player_hits, 10);
        assert_eq!(summary.batches.len(), 3);
        assert!(!summary.stuck);
    }

    #[test]
    fn answer_budget_halts_long_runs() {
        let plan = SimulationPlan::new(AnswerStrategy::Perfect).with_max_answers(12);
        let summary = tester().run_plan(&plan, 3);
        assert_eq!(summary.answers.len(), 12);
        assert_eq!(summary.final_state.current_level, 3);
        assert_eq!(summary.ending_label(), "halted");
    }
}
