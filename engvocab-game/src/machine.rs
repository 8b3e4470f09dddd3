//! Encounter state machine: collisions, answers, health and level flow.
use crate::bank::QuestionBank;
use crate::combat::{Combatant, Health};
use crate::command::{Banner, DisplayCommand, EnemyLook, ViewportSize};
use crate::constants::{
    CHEAT_TRANSITION_DELAY_MS, DEFAULT_BATCH_SIZE, ENCOUNTER_RESUME_DELAY_MS,
    GAME_OVER_REVEAL_DELAY_MS, INITIAL_ENCOUNTER_DELAY_MS, INPUT_FOCUS_DELAY_MS,
    LEVEL_SETUP_DELAY_MS, VICTORY_ADVANCE_DELAY_MS, VICTORY_REVEAL_DELAY_MS,
};
use crate::encounter::{AnswerOutcome, next_question_index, resolve_submission};
use crate::input::Submission;
use crate::question::{Question, Tier};
use crate::scheduler::Scheduler;
use crate::state::{EncounterPhase, EncounterState};
use crate::tracker::QuestionTracker;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Deferred steps of the encounter flow.
///
/// Each step re-checks the phase it expects before applying, so a step that
/// outlives its sequence (for example across a restart) does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimedTransition {
    InitialEncounter,
    FocusAnswer,
    RevealVictory,
    AdvanceLevel,
    RevealGameOver,
    BeginLevel { cheat: bool },
    FinishLevelSetup,
    ResumeEncounter,
}

pub type Commands = Vec<DisplayCommand>;

/// Single owner of the run state, question pools and pending transitions.
#[derive(Debug, Clone)]
pub struct EncounterMachine<R: Rng> {
    bank: QuestionBank,
    tracker: QuestionTracker,
    state: EncounterState,
    scheduler: Scheduler<TimedTransition>,
    viewport: ViewportSize,
    batch_size: usize,
    rng: R,
}

impl EncounterMachine<ChaCha20Rng> {
    #[must_use]
    pub fn seeded(bank: QuestionBank, seed: u64) -> Self {
        Self::new(bank, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> EncounterMachine<R> {
    #[must_use]
    pub fn new(bank: QuestionBank, rng: R) -> Self {
        Self {
            bank,
            tracker: QuestionTracker::new(),
            state: EncounterState::default(),
            scheduler: Scheduler::new(),
            viewport: ViewportSize::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            rng,
        }
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    #[must_use]
    pub const fn state(&self) -> &EncounterState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> EncounterPhase {
        self.state.phase
    }

    #[must_use]
    pub const fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub const fn tracker(&self) -> &QuestionTracker {
        &self.tracker
    }

    #[must_use]
    pub const fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Milliseconds until the next deferred step, if one is pending.
    #[must_use]
    pub fn next_due_in(&self) -> Option<u64> {
        self.scheduler.next_due_in()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.scheduler.is_idle()
    }

    /// Build the opening scene for level 1 and queue the first encounter.
    pub fn start(&mut self) -> Commands {
        self.state = EncounterState::default();
        let batch = self.draw_batch();
        self.state.install_batch(batch);
        log::info!(
            "starting run with {} level-1 questions",
            self.state.current_level_questions.len()
        );

        self.scheduler
            .schedule(INITIAL_ENCOUNTER_DELAY_MS, TimedTransition::InitialEncounter);
        vec![
            DisplayCommand::SetLevelLabel {
                level: self.state.current_level,
            },
            DisplayCommand::health(Combatant::Player, self.state.player_health),
            DisplayCommand::health(Combatant::Enemy, self.state.enemy_health),
            DisplayCommand::SpawnEnemy {
                look: EnemyLook::for_level(self.state.current_level),
            },
            DisplayCommand::show_question(&self.state.current_question.text),
            DisplayCommand::BindQuestionControls,
            DisplayCommand::ShowQuestionBox,
            DisplayCommand::SetGameplayActive { active: true },
        ]
    }

    /// Collision callback between two actors.
    ///
    /// Only a player/enemy pair starts an encounter, and only while roaming.
    pub fn encounter_enemy(&mut self, a: Combatant, b: Combatant) -> Commands {
        if a == b {
            log::debug!("ignoring {a}/{b} overlap");
            return Vec::new();
        }
        self.trigger_encounter()
    }

    fn trigger_encounter(&mut self) -> Commands {
        if self.state.phase != EncounterPhase::Roaming || !self.state.game_active {
            log::debug!("encounter ignored during {:?}", self.state.phase);
            return Vec::new();
        }

        self.state.phase = EncounterPhase::Questioning;
        self.state.game_active = false;
        self.state.ensure_valid_question();
        self.scheduler
            .schedule(INPUT_FOCUS_DELAY_MS, TimedTransition::FocusAnswer);
        log::debug!("encounter: {}", self.state.current_question.text);

        vec![
            DisplayCommand::SetGameplayActive { active: false },
            DisplayCommand::HaltActors,
            DisplayCommand::show_question(&self.state.current_question.text),
            DisplayCommand::ShowQuestionBox,
            DisplayCommand::ClearAnswer,
        ]
    }

    /// Evaluate an answer typed into the question box.
    pub fn submit_answer(&mut self, raw: &str) -> Commands {
        if self.state.phase != EncounterPhase::Questioning {
            log::debug!("answer ignored during {:?}", self.state.phase);
            return Vec::new();
        }

        let submission = Submission::classify(raw);
        let outcome = resolve_submission(&self.state, &submission);
        let mut commands = Vec::new();

        match outcome {
            AnswerOutcome::LevelSkip { target } => {
                return self.skip_to_level(target);
            }
            AnswerOutcome::Hit {
                enemy_health,
                defeated,
            } => {
                self.state.enemy_health = enemy_health;
                commands.push(DisplayCommand::health(Combatant::Enemy, enemy_health));
                commands.push(DisplayCommand::PlayAttack {
                    attacker: Combatant::Player,
                });
                if defeated {
                    log::info!("enemy defeated on level {}", self.state.current_level);
                    self.state.phase = EncounterPhase::LevelTransition;
                    commands.push(DisplayCommand::HideEnemy);
                    self.scheduler
                        .schedule(VICTORY_REVEAL_DELAY_MS, TimedTransition::RevealVictory);
                    return commands;
                }
            }
            AnswerOutcome::Miss {
                player_health,
                defeated,
            } => {
                self.state.player_health = player_health;
                commands.push(DisplayCommand::health(Combatant::Player, player_health));
                commands.push(DisplayCommand::PlayAttack {
                    attacker: Combatant::Enemy,
                });
                if defeated {
                    log::info!("player defeated on level {}", self.state.current_level);
                    self.state.phase = EncounterPhase::GameOver;
                    self.state.game_active = false;
                    self.scheduler
                        .schedule(GAME_OVER_REVEAL_DELAY_MS, TimedTransition::RevealGameOver);
                    return commands;
                }
            }
        }

        commands.extend(self.advance_question());
        commands
    }

    fn advance_question(&mut self) -> Commands {
        let batch = &self.state.current_level_questions;
        if batch.is_empty() {
            return vec![DisplayCommand::ClearAnswer, DisplayCommand::FocusAnswer];
        }
        let next = next_question_index(batch, &self.state.current_question);
        self.state.current_question = batch[next].clone();
        vec![
            DisplayCommand::show_question(&self.state.current_question.text),
            DisplayCommand::ClearAnswer,
            DisplayCommand::FocusAnswer,
        ]
    }

    fn skip_to_level(&mut self, target: u32) -> Commands {
        log::info!(
            "level skip from {} to {target}",
            self.state.current_level
        );
        if target < self.state.current_level {
            self.tracker.reset_tracking(Tier::for_level(target));
        }
        self.state.phase = EncounterPhase::LevelTransition;
        self.state.current_level = target;
        self.scheduler.schedule(
            CHEAT_TRANSITION_DELAY_MS,
            TimedTransition::BeginLevel { cheat: true },
        );
        vec![
            DisplayCommand::HideEnemy,
            DisplayCommand::HideQuestionBox,
            DisplayCommand::ShowBanner {
                banner: Banner::CheatSkip { level: target },
            },
        ]
    }

    /// Move the virtual clock forward, running every deferred step that comes
    /// due, including steps scheduled by earlier ones inside the same window.
    pub fn advance_clock(&mut self, elapsed_ms: u64) -> Commands {
        let deadline = self.scheduler.now_ms().saturating_add(elapsed_ms);
        let mut commands = Vec::new();
        while let Some(step) = self.scheduler.pop_due(deadline) {
            commands.extend(self.run_transition(step));
        }
        self.scheduler.advance_to(deadline);
        commands
    }

    /// Run the clock until no deferred steps remain or `limit_ms` elapses.
    pub fn settle(&mut self, limit_ms: u64) -> Commands {
        let mut commands = Vec::new();
        let mut budget = limit_ms;
        while let Some(wait) = self.scheduler.next_due_in() {
            if wait > budget {
                break;
            }
            budget -= wait;
            commands.extend(self.advance_clock(wait));
        }
        commands
    }

    fn run_transition(&mut self, step: TimedTransition) -> Commands {
        let phase = self.state.phase;
        match (step, phase) {
            (TimedTransition::InitialEncounter, _) => self.trigger_encounter(),
            (TimedTransition::FocusAnswer, EncounterPhase::Questioning) => {
                vec![DisplayCommand::FocusAnswer]
            }
            (TimedTransition::RevealVictory, EncounterPhase::LevelTransition) => {
                self.scheduler
                    .schedule(VICTORY_ADVANCE_DELAY_MS, TimedTransition::AdvanceLevel);
                vec![
                    DisplayCommand::HideQuestionBox,
                    DisplayCommand::ShowBanner {
                        banner: Banner::Victory,
                    },
                ]
            }
            (TimedTransition::AdvanceLevel, EncounterPhase::LevelTransition) => {
                self.state.current_level += 1;
                self.begin_level(false)
            }
            (TimedTransition::RevealGameOver, EncounterPhase::GameOver) => vec![
                DisplayCommand::HideQuestionBox,
                DisplayCommand::ShowBanner {
                    banner: Banner::GameOver,
                },
            ],
            (TimedTransition::BeginLevel { cheat }, EncounterPhase::LevelTransition) => {
                self.begin_level(cheat)
            }
            (TimedTransition::FinishLevelSetup, EncounterPhase::LevelTransition) => {
                self.finish_level_setup()
            }
            (TimedTransition::ResumeEncounter, EncounterPhase::LevelTransition) => {
                self.state.phase = EncounterPhase::Roaming;
                self.state.game_active = true;
                let mut commands = vec![DisplayCommand::SetGameplayActive { active: true }];
                commands.extend(self.trigger_encounter());
                commands
            }
            (step, phase) => {
                log::debug!("dropping stale {step:?} during {phase:?}");
                Vec::new()
            }
        }
    }

    fn begin_level(&mut self, cheat: bool) -> Commands {
        let level = self.state.current_level;
        log::info!(
            "level transition to {level} ({})",
            if cheat { "level skip" } else { "victory" }
        );
        self.state.enemy_health = Health::full();
        self.scheduler
            .schedule(LEVEL_SETUP_DELAY_MS, TimedTransition::FinishLevelSetup);
        vec![
            DisplayCommand::ClearTransientBanners,
            DisplayCommand::SetLevelLabel { level },
            DisplayCommand::health(Combatant::Enemy, self.state.enemy_health),
            DisplayCommand::ShowBanner {
                banner: Banner::Level { level, cheat },
            },
        ]
    }

    fn finish_level_setup(&mut self) -> Commands {
        let level = self.state.current_level;
        let batch = self.draw_batch();
        self.state.install_batch(batch);
        self.scheduler
            .schedule(ENCOUNTER_RESUME_DELAY_MS, TimedTransition::ResumeEncounter);
        vec![
            DisplayCommand::FadeLevelBanner,
            DisplayCommand::SpawnEnemy {
                look: EnemyLook::for_level(level),
            },
            DisplayCommand::show_question(&self.state.current_question.text),
            DisplayCommand::health(Combatant::Enemy, self.state.enemy_health),
            DisplayCommand::BindQuestionControls,
        ]
    }

    fn draw_batch(&mut self) -> Vec<Question> {
        self.tracker.select_fresh_questions(
            &self.bank,
            self.state.current_level,
            self.batch_size,
            &mut self.rng,
        )
    }

    /// Throw away the current run, including any pending transitions, and
    /// rebuild the opening scene.
    pub fn restart(&mut self) -> Commands {
        log::info!("restarting from level {}", self.state.current_level);
        self.scheduler.cancel_all();
        let mut commands = vec![DisplayCommand::ResetScene];
        commands.extend(self.start());
        commands
    }

    /// Replace the current question outright.
    pub fn set_question(&mut self, text: &str, answer: &str) -> Commands {
        self.state.current_question = Question::new(text.trim(), answer.trim());
        if self.state.phase == EncounterPhase::Questioning {
            vec![DisplayCommand::show_question(&self.state.current_question.text)]
        } else {
            Vec::new()
        }
    }

    /// Dismiss the question box and let the actors move again.
    pub fn resume_game(&mut self) -> Commands {
        match self.state.phase {
            EncounterPhase::Roaming | EncounterPhase::Questioning => {
                self.state.phase = EncounterPhase::Roaming;
                self.state.game_active = true;
                vec![
                    DisplayCommand::HideQuestionBox,
                    DisplayCommand::SetGameplayActive { active: true },
                ]
            }
            phase => {
                log::warn!("resume ignored during {phase:?}");
                Vec::new()
            }
        }
    }

    pub fn handle_resize(&mut self, size: ViewportSize) -> Commands {
        self.viewport = size;
        vec![DisplayCommand::ResizeViewport { size }]
    }
}
