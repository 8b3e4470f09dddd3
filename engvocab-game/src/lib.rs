//! EngVocab Game Engine
//!
//! Platform-agnostic core logic for the EngVocab vocabulary quiz platformer.
//! This crate owns the question corpus, non-repeating question selection and
//! the encounter state machine; it emits display commands instead of touching
//! any rendering or DOM API.

pub mod animation;
pub mod bank;
pub mod combat;
pub mod command;
pub mod constants;
pub mod encounter;
pub mod input;
pub mod machine;
pub mod question;
pub mod scheduler;
pub mod state;
pub mod tracker;

// Re-export commonly used types
pub use animation::{AnimationAction, AnimationScript, FlashColor, Tint, TimedStep};
pub use bank::{BankLoad, BankSource, CorpusError, QuestionBank};
pub use combat::{Combatant, Health, HealthBand};
pub use command::{Banner, DisplayCommand, EnemyLook, ViewportSize};
pub use encounter::{AnswerOutcome, next_question_index, resolve_submission};
pub use input::{Submission, parse_level_skip};
pub use machine::{Commands, EncounterMachine, TimedTransition};
pub use question::{Question, Tier, normalize_answer};
pub use scheduler::{Scheduler, TimerId};
pub use state::{EncounterPhase, EncounterState};
pub use tracker::QuestionTracker;

use rand_chacha::ChaCha20Rng;

/// Trait for abstracting corpus loading
/// Platform-specific implementations should provide this
pub trait CorpusLoader {
    type Error: Into<CorpusError>;

    /// Load the raw question corpus text
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be read from its source.
    fn load_corpus(&self) -> Result<String, Self::Error>;
}

/// Trait for the presentation layer that renders display commands
pub trait CombatPresenter {
    fn apply(&mut self, command: &DisplayCommand);

    fn apply_all(&mut self, commands: &[DisplayCommand]) {
        for command in commands {
            self.apply(command);
        }
    }
}

/// Main game engine pairing the encounter machine with a presenter
pub struct GameEngine<P>
where
    P: CombatPresenter,
{
    machine: EncounterMachine<ChaCha20Rng>,
    presenter: P,
}

impl<P> GameEngine<P>
where
    P: CombatPresenter,
{
    /// Create an engine over an already loaded bank
    #[must_use]
    pub fn new(bank: QuestionBank, presenter: P, seed: u64) -> Self {
        Self {
            machine: EncounterMachine::seeded(bank, seed),
            presenter,
        }
    }

    /// Create an engine from a corpus loader, substituting the built-in
    /// questions when loading fails. The returned source tells the caller
    /// whether to notify the player.
    pub fn load<L>(loader: &L, presenter: P, seed: u64) -> (Self, BankSource)
    where
        L: CorpusLoader,
    {
        let BankLoad { bank, source } =
            QuestionBank::from_corpus(loader.load_corpus().map_err(Into::into));
        (Self::new(bank, presenter, seed), source)
    }

    #[must_use]
    pub const fn machine(&self) -> &EncounterMachine<ChaCha20Rng> {
        &self.machine
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub const fn state(&self) -> &EncounterState {
        self.machine.state()
    }

    #[must_use]
    pub const fn phase(&self) -> EncounterPhase {
        self.machine.phase()
    }

    fn present(&mut self, commands: &[DisplayCommand]) {
        self.presenter.apply_all(commands);
    }

    pub fn start(&mut self) {
        let commands = self.machine.start();
        self.present(&commands);
    }

    pub fn encounter_enemy(&mut self, a: Combatant, b: Combatant) {
        let commands = self.machine.encounter_enemy(a, b);
        self.present(&commands);
    }

    pub fn submit_answer(&mut self, raw: &str) {
        let commands = self.machine.submit_answer(raw);
        self.present(&commands);
    }

    pub fn advance_clock(&mut self, elapsed_ms: u64) {
        let commands = self.machine.advance_clock(elapsed_ms);
        self.present(&commands);
    }

    pub fn restart(&mut self) {
        let commands = self.machine.restart();
        self.present(&commands);
    }

    pub fn set_question(&mut self, text: &str, answer: &str) {
        let commands = self.machine.set_question(text, answer);
        self.present(&commands);
    }

    pub fn resume_game(&mut self) {
        let commands = self.machine.resume_game();
        self.present(&commands);
    }

    pub fn handle_resize(&mut self, size: ViewportSize) {
        let commands = self.machine.handle_resize(size);
        self.present(&commands);
    }
}
