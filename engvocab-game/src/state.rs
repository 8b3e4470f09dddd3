use crate::combat::{Combatant, Health};
use crate::constants::FIRST_LEVEL;
use crate::question::{Question, Tier};
use serde::{Deserialize, Serialize};

/// Where the encounter flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterPhase {
    /// Actors move freely; a collision starts an encounter.
    #[default]
    Roaming,
    /// Gameplay paused while a question waits for an answer.
    Questioning,
    /// Victory or level-skip sequence in flight.
    LevelTransition,
    /// Player defeated; only a restart leaves this phase.
    GameOver,
}

/// Complete mutable state of one run, owned by the encounter machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterState {
    pub phase: EncounterPhase,
    pub current_question: Question,
    pub current_level_questions: Vec<Question>,
    pub current_level: u32,
    pub player_health: Health,
    pub enemy_health: Health,
    pub game_active: bool,
}

impl Default for EncounterState {
    fn default() -> Self {
        Self {
            phase: EncounterPhase::Roaming,
            current_question: Question::default_prompt(),
            current_level_questions: Vec::new(),
            current_level: FIRST_LEVEL,
            player_health: Health::full(),
            enemy_health: Health::full(),
            game_active: true,
        }
    }
}

impl EncounterState {
    #[must_use]
    pub const fn tier(&self) -> Tier {
        Tier::for_level(self.current_level)
    }

    #[must_use]
    pub const fn health_of(&self, side: Combatant) -> Health {
        match side {
            Combatant::Player => self.player_health,
            Combatant::Enemy => self.enemy_health,
        }
    }

    /// Install a freshly drawn batch, pointing at its first entry or at the
    /// default prompt when the batch is empty.
    pub fn install_batch(&mut self, batch: Vec<Question>) {
        self.current_question = batch.first().cloned().unwrap_or_default();
        self.current_level_questions = batch;
    }

    /// Ensure the question about to be shown has displayable text.
    pub fn ensure_valid_question(&mut self) {
        if !self.current_question.is_valid() {
            log::warn!("current question was empty, showing the default prompt");
            self.current_question = Question::default_prompt();
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, EncounterPhase::GameOver)
    }
}
