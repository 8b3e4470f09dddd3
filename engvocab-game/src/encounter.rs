//! Pure answer resolution.
//!
//! These functions read the current [`EncounterState`] and describe what a
//! submission does without applying it, so the scoring rules can be checked
//! independently of timers and presentation.
use crate::combat::{Combatant, Health};
use crate::input::Submission;
use crate::question::Question;
use crate::state::EncounterState;

/// What a submission does to the encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Jump to `target` without touching health.
    LevelSkip { target: u32 },
    /// Correct answer: the enemy takes a hit.
    Hit { enemy_health: Health, defeated: bool },
    /// Wrong answer: the player takes a hit.
    Miss { player_health: Health, defeated: bool },
}

impl AnswerOutcome {
    /// Side that lands the blow, if any.
    #[must_use]
    pub const fn attacker(&self) -> Option<Combatant> {
        match self {
            Self::LevelSkip { .. } => None,
            Self::Hit { .. } => Some(Combatant::Player),
            Self::Miss { .. } => Some(Combatant::Enemy),
        }
    }

    /// Whether the encounter keeps cycling questions afterwards.
    #[must_use]
    pub const fn continues(&self) -> bool {
        match self {
            Self::LevelSkip { .. } => false,
            Self::Hit { defeated, .. } | Self::Miss { defeated, .. } => !*defeated,
        }
    }
}

#[must_use]
pub fn resolve_submission(state: &EncounterState, submission: &Submission) -> AnswerOutcome {
    match submission {
        Submission::LevelSkip(target) => AnswerOutcome::LevelSkip { target: *target },
        Submission::Answer(answer) if state.current_question.accepts(answer) => {
            let enemy_health = state.enemy_health.hit();
            AnswerOutcome::Hit {
                enemy_health,
                defeated: enemy_health.is_depleted(),
            }
        }
        Submission::Answer(_) => {
            let player_health = state.player_health.hit();
            AnswerOutcome::Miss {
                player_health,
                defeated: player_health.is_depleted(),
            }
        }
    }
}

/// Index of the question after `current` in round-robin order, or 0 when
/// `current` is not part of the batch.
#[must_use]
pub fn next_question_index(batch: &[Question], current: &Question) -> usize {
    batch
        .iter()
        .position(|question| question.text == current.text)
        .map_or(0, |idx| (idx + 1) % batch.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Vec<Question> {
        vec![
            Question::new("one", "1"),
            Question::new("two", "2"),
            Question::new("three", "3"),
        ]
    }

    #[test]
    fn correct_answer_hits_enemy() {
        let mut state = EncounterState::default();
        state.install_batch(batch());
        let outcome = resolve_submission(&state, &Submission::classify(" 1 "));
        assert_eq!(
            outcome,
            AnswerOutcome::Hit {
                enemy_health: Health::new(80),
                defeated: false
            }
        );
        assert_eq!(outcome.attacker(), Some(Combatant::Player));
        assert!(outcome.continues());
    }

    #[test]
    fn wrong_answer_at_low_health_defeats_player() {
        let mut state = EncounterState::default();
        state.player_health = Health::new(20);
        let outcome = resolve_submission(&state, &Submission::classify("nope"));
        assert_eq!(
            outcome,
            AnswerOutcome::Miss {
                player_health: Health::new(0),
                defeated: true
            }
        );
        assert!(!outcome.continues());
    }

    #[test]
    fn level_skip_ignores_health() {
        let state = EncounterState::default();
        let outcome = resolve_submission(&state, &Submission::classify("lvl2"));
        assert_eq!(outcome, AnswerOutcome::LevelSkip { target: 2 });
        assert_eq!(outcome.attacker(), None);
    }

    #[test]
    fn next_index_wraps_and_defaults() {
        let batch = batch();
        assert_eq!(next_question_index(&batch, &batch[0]), 1);
        assert_eq!(next_question_index(&batch, &batch[2]), 0);
        assert_eq!(next_question_index(&batch, &Question::new("stray", "x")), 0);
    }
}
