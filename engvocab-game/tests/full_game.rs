use engvocab_game::{
    Banner, CombatPresenter, Combatant, CorpusError, CorpusLoader, DisplayCommand, EncounterPhase,
    GameEngine, Health, HealthBand, Tier,
    constants::{INITIAL_ENCOUNTER_DELAY_MS, LEVEL_SETUP_DELAY_MS},
};
use std::collections::HashSet;

const CORPUS: &str = include_str!("../../engvocab-web/static/english_game_questions.txt");

struct StaticCorpus;

impl CorpusLoader for StaticCorpus {
    type Error = CorpusError;

    fn load_corpus(&self) -> Result<String, Self::Error> {
        Ok(CORPUS.to_string())
    }
}

#[derive(Default)]
struct Transcript {
    commands: Vec<DisplayCommand>,
}

impl Transcript {
    fn banners(&self) -> Vec<Banner> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DisplayCommand::ShowBanner { banner } => Some(*banner),
                _ => None,
            })
            .collect()
    }

    fn attacks_by(&self, side: Combatant) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DisplayCommand::PlayAttack { attacker } if *attacker == side))
            .count()
    }
}

impl CombatPresenter for Transcript {
    fn apply(&mut self, command: &DisplayCommand) {
        self.commands.push(command.clone());
    }
}

fn engine(seed: u64) -> GameEngine<Transcript> {
    let (mut engine, source) = GameEngine::load(&StaticCorpus, Transcript::default(), seed);
    assert!(!source.is_fallback());
    engine.start();
    engine.advance_clock(INITIAL_ENCOUNTER_DELAY_MS);
    engine
}

fn answer_correctly(engine: &mut GameEngine<Transcript>) {
    let answer = engine.state().current_question.answer.clone();
    engine.submit_answer(&format!("  {}  ", answer.to_uppercase()));
}

fn settle(engine: &mut GameEngine<Transcript>) {
    for _ in 0..200 {
        if engine.machine().is_settled() {
            return;
        }
        engine.advance_clock(50);
    }
}

#[test]
fn perfect_run_clears_three_levels() {
    let mut engine = engine(0x5EED);
    for level in 1..=3 {
        assert_eq!(engine.state().current_level, level);
        assert_eq!(engine.state().phase, EncounterPhase::Questioning);
        for _ in 0..5 {
            answer_correctly(&mut engine);
        }
        assert_eq!(engine.state().phase, EncounterPhase::LevelTransition);
        settle(&mut engine);
    }

    assert_eq!(engine.state().current_level, 4);
    assert_eq!(engine.state().tier(), Tier::Advanced);
    assert_eq!(engine.state().player_health, Health::full());
    assert_eq!(engine.presenter().attacks_by(Combatant::Enemy), 0);
    assert_eq!(engine.presenter().attacks_by(Combatant::Player), 15);

    let victories = engine
        .presenter()
        .banners()
        .into_iter()
        .filter(|banner| *banner == Banner::Victory)
        .count();
    assert_eq!(victories, 3);
    assert!(
        engine
            .presenter()
            .banners()
            .contains(&Banner::Level { level: 4, cheat: false })
    );
}

#[test]
fn hopeless_run_ends_after_five_misses_and_restarts() {
    let mut engine = engine(11);
    for expected in [80, 60, 40, 20, 0] {
        engine.submit_answer("no idea at all");
        assert_eq!(engine.state().player_health, Health::new(expected));
    }
    assert!(engine.state().is_over());
    assert_eq!(engine.state().player_health.band(), HealthBand::Critical);
    settle(&mut engine);
    assert_eq!(engine.presenter().banners().last(), Some(&Banner::GameOver));

    engine.submit_answer("anything");
    assert_eq!(engine.state().player_health, Health::new(0));

    engine.restart();
    assert_eq!(engine.state().phase, EncounterPhase::Roaming);
    assert_eq!(engine.state().player_health, Health::full());
    engine.advance_clock(INITIAL_ENCOUNTER_DELAY_MS);
    assert_eq!(engine.state().phase, EncounterPhase::Questioning);
}

#[test]
fn cheat_banner_precedes_level_banner() {
    let mut engine = engine(3);
    engine.submit_answer("lvl2");
    engine.advance_clock(1_000);
    let banners = engine.presenter().banners();
    assert_eq!(
        banners,
        vec![
            Banner::CheatSkip { level: 2 },
            Banner::Level {
                level: 2,
                cheat: true
            }
        ]
    );
    engine.advance_clock(LEVEL_SETUP_DELAY_MS);
    assert!(
        engine
            .presenter()
            .commands
            .contains(&DisplayCommand::FadeLevelBanner)
    );
}

#[test]
fn restart_keeps_issued_questions_out_of_the_next_batch() {
    let mut engine = engine(21);
    let first: HashSet<String> = engine
        .state()
        .current_level_questions
        .iter()
        .map(|question| question.text.clone())
        .collect();
    assert_eq!(first.len(), 5);

    engine.restart();
    let second = &engine.state().current_level_questions;
    assert_eq!(second.len(), 5);
    assert!(second.iter().all(|question| !first.contains(&question.text)));
    assert_eq!(engine.machine().tracker().used_count(Tier::Beginner), 10);
}

#[test]
fn encounters_ignore_stray_collisions() {
    let mut engine = engine(5);
    let before = engine.presenter().commands.len();
    engine.encounter_enemy(Combatant::Player, Combatant::Enemy);
    assert_eq!(engine.presenter().commands.len(), before);

    engine.resume_game();
    assert_eq!(engine.state().phase, EncounterPhase::Roaming);
    engine.encounter_enemy(Combatant::Player, Combatant::Player);
    assert_eq!(engine.state().phase, EncounterPhase::Roaming);
    engine.encounter_enemy(Combatant::Enemy, Combatant::Player);
    assert_eq!(engine.state().phase, EncounterPhase::Questioning);
}
