use anyhow::{Result, ensure};
use engvocab_game::constants::{DAMAGE_STEP, DEFAULT_BATCH_SIZE, HEALTH_MAX};
use engvocab_game::{Banner, Tier};
use std::collections::HashSet;

use crate::logic::SimulationSummary;

/// Health left after `hits` attacks.
fn health_after(hits: usize) -> u8 {
    let hits = u8::try_from(hits).unwrap_or(u8::MAX);
    HEALTH_MAX.saturating_sub(DAMAGE_STEP.saturating_mul(hits))
}

fn expected_batch_len(summary: &SimulationSummary, tier: Tier) -> usize {
    DEFAULT_BATCH_SIZE.min(summary.tier_sizes[tier.index()])
}

pub fn smoke_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(!summary.stuck, "run stalled outside an encounter");
    ensure!(!summary.answers.is_empty(), "no question was ever asked");

    let player = summary.final_state.player_health.value();
    ensure!(
        player == health_after(summary.enemy_hits),
        "player health {player} does not match {} enemy hits",
        summary.enemy_hits
    );
    if summary.game_over() {
        ensure!(player == 0, "game over with {player} health left");
    }

    for answer in &summary.answers {
        let asked_from_batch = summary
            .batches
            .iter()
            .any(|batch| batch.level == answer.level && batch.texts.contains(&answer.question));
        ensure!(
            asked_from_batch,
            "question {:?} on level {} was not in any drawn batch",
            answer.question,
            answer.level
        );
    }
    Ok(())
}

pub fn victory_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.victories() == 3, "expected 3 victories, saw {}", summary.victories());
    ensure!(
        summary.final_state.current_level == 4,
        "expected to reach level 4, stopped on {}",
        summary.final_state.current_level
    );
    ensure!(
        summary.final_state.player_health.value() == HEALTH_MAX,
        "perfect run lost health"
    );
    ensure!(summary.enemy_hits == 0, "enemy landed {} hits", summary.enemy_hits);
    ensure!(
        summary.player_hits == 15,
        "expected 15 player attacks, saw {}",
        summary.player_hits
    );

    for (index, level) in (2..=4).enumerate() {
        let pair = summary.banners.get(index * 2..index * 2 + 2);
        ensure!(
            pair == Some(&[Banner::Victory, Banner::Level { level, cheat: false }][..]),
            "level {level} was not announced after a victory: {:?}",
            summary.banners
        );
    }

    ensure!(summary.batches.len() == 4, "expected one batch per level");
    for batch in &summary.batches {
        let expected = expected_batch_len(summary, batch.tier());
        ensure!(
            batch.texts.len() == expected,
            "level {} batch has {} questions, expected {expected}",
            batch.level,
            batch.texts.len()
        );
    }
    Ok(())
}

pub fn game_over_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.game_over(), "run did not end");
    ensure!(
        summary.answers.len() == 5,
        "expected 5 answers before defeat, saw {}",
        summary.answers.len()
    );
    ensure!(summary.enemy_hits == 5, "expected 5 enemy attacks");
    ensure!(summary.final_state.player_health.value() == 0, "player survived");
    ensure!(summary.final_state.current_level == 1, "level changed during defeat");
    ensure!(
        summary.banners == [Banner::GameOver],
        "unexpected banners {:?}",
        summary.banners
    );
    Ok(())
}

pub fn cheat_skip_expectation(summary: &SimulationSummary) -> Result<()> {
    let first = summary.answers.first();
    ensure!(
        first.is_some_and(|answer| answer.level_skip) && summary.answers.len() == 1,
        "expected a single level-skip answer, saw {:?}",
        summary.answers
    );
    ensure!(
        summary.banners
            == [
                Banner::CheatSkip { level: 2 },
                Banner::Level {
                    level: 2,
                    cheat: true
                }
            ],
        "unexpected banners {:?}",
        summary.banners
    );
    ensure!(summary.final_state.current_level == 2, "did not land on level 2");
    ensure!(
        summary.final_state.player_health.value() == HEALTH_MAX,
        "skip cost player health"
    );
    ensure!(
        summary.final_state.enemy_health.value() == HEALTH_MAX,
        "new enemy did not start at full health"
    );
    ensure!(
        summary.batches.last().map(|batch| batch.level) == Some(2),
        "no level 2 batch was drawn"
    );
    Ok(())
}

/// Replays the per-tier reset rule and checks that no batch repeats a
/// question issued earlier in the same epoch.
pub fn no_repeat_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.batches.len() >= 10,
        "run too short to exercise resets: {} batches",
        summary.batches.len()
    );

    let mut seen: [HashSet<&str>; 3] = Default::default();
    for batch in &summary.batches {
        let tier = batch.tier();
        let pool = summary.tier_sizes[tier.index()];
        let count = expected_batch_len(summary, tier);
        let used = &mut seen[tier.index()];
        if used.len() >= pool.saturating_sub(count) {
            used.clear();
        }

        for text in &batch.texts {
            ensure!(
                used.insert(text.as_str()),
                "level {} repeated {text:?} within one {tier} epoch",
                batch.level
            );
        }
    }
    Ok(())
}

pub fn circular_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.game_over(), "alternating run should end in defeat");
    ensure!(
        summary.answers.len() == 9,
        "expected 9 answers, saw {}",
        summary.answers.len()
    );
    let correct = summary.answers.iter().filter(|answer| answer.correct).count();
    ensure!(correct == 4, "expected 4 correct answers, saw {correct}");
    ensure!(
        summary.final_state.enemy_health.value() == health_after(4),
        "enemy health does not reflect 4 hits"
    );

    let Some(batch) = summary.batches.first() else {
        anyhow::bail!("no level 1 batch recorded");
    };
    ensure!(!batch.texts.is_empty(), "level 1 batch is empty");
    for (index, answer) in summary.answers.iter().enumerate() {
        let expected = &batch.texts[index % batch.texts.len()];
        ensure!(
            &answer.question == expected,
            "answer {} was for {:?}, expected {expected:?}",
            index + 1,
            answer.question
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::{get_scenario, list_scenarios};
    use crate::logic::GameTester;
    use crate::logic::corpus::EMBEDDED_CORPUS;
    use engvocab_game::QuestionBank;
    use std::sync::Arc;

    #[test]
    fn health_after_saturates() {
        assert_eq!(health_after(0), HEALTH_MAX);
        assert_eq!(health_after(2), HEALTH_MAX - 2 * DAMAGE_STEP);
        assert_eq!(health_after(9), 0);
    }

    #[test]
    fn every_scenario_passes_on_the_shipped_corpus() {
        let tester = GameTester::new(Arc::new(QuestionBank::parse(EMBEDDED_CORPUS)), false);
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).unwrap();
            for seed in [1, 1337, 0xBEEF] {
                let summary = tester.run_plan(&scenario.plan, seed);
                for expectation in &scenario.plan.expectations {
                    if let Err(err) = expectation(&summary) {
                        panic!("{key} failed for seed {seed}: {err}");
                    }
                }
            }
        }
    }

    #[test]
    fn victory_expectation_rejects_a_defeat() {
        let tester = GameTester::new(Arc::new(QuestionBank::parse(EMBEDDED_CORPUS)), false);
        let plan = get_scenario("game-over").unwrap().plan;
        let summary = tester.run_plan(&plan, 1);
        assert!(victory_expectation(&summary).is_err());
    }
}
