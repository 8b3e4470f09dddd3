//! Non-repeating question selection per difficulty tier.
use crate::bank::QuestionBank;
use crate::question::{Question, Tier};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Remembers which question texts each tier has already issued.
///
/// A tier's used-set forms an epoch: no text is handed out twice until the
/// set is reset, which happens automatically once too few unused questions
/// remain for another batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionTracker {
    used: [HashSet<String>; 3],
}

impl QuestionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_tracking(&mut self, tier: Tier) {
        self.used[tier.index()].clear();
        log::debug!("reset tracking for {tier} questions");
    }

    pub fn reset_all(&mut self) {
        for tier in Tier::ALL {
            self.reset_tracking(tier);
        }
    }

    pub fn mark_used(&mut self, level: u32, text: &str) {
        let tier = Tier::for_level(level);
        self.used[tier.index()].insert(text.to_string());
    }

    #[must_use]
    pub fn has_been_used(&self, level: u32, text: &str) -> bool {
        self.used[Tier::for_level(level).index()].contains(text)
    }

    #[must_use]
    pub fn used_count(&self, tier: Tier) -> usize {
        self.used[tier.index()].len()
    }

    /// Draw up to `count` questions for `level` that have not been issued in
    /// the tier's current epoch.
    ///
    /// The batch size is clamped to the number of distinct question texts in
    /// the pool, so a small pool yields a shorter batch instead of looping.
    pub fn select_fresh_questions<R: Rng + ?Sized>(
        &mut self,
        bank: &QuestionBank,
        level: u32,
        count: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        let tier = Tier::for_level(level);
        let pool = distinct_by_text(bank.questions(tier));
        if pool.is_empty() {
            log::warn!("no {tier} questions available for level {level}");
            return Vec::new();
        }

        if count > pool.len() {
            log::warn!(
                "only {} distinct {tier} questions, batch truncated from {count}",
                pool.len()
            );
        }
        let count = count.min(pool.len());
        if count == 0 {
            return Vec::new();
        }
        if self.used_count(tier) >= pool.len().saturating_sub(count) {
            self.reset_tracking(tier);
        }

        let mut available = self.unused(tier, &pool);
        if available.len() < count {
            self.reset_tracking(tier);
            available = self.unused(tier, &pool);
        }

        available.shuffle(rng);
        available.truncate(count);

        let used = &mut self.used[tier.index()];
        for question in &available {
            used.insert(question.text.clone());
        }

        log::debug!(
            "selected {} fresh {tier} questions for level {level}",
            available.len()
        );
        available.into_iter().cloned().collect()
    }

    fn unused<'a>(&self, tier: Tier, pool: &[&'a Question]) -> Vec<&'a Question> {
        let used = &self.used[tier.index()];
        pool.iter()
            .copied()
            .filter(|question| !used.contains(&question.text))
            .collect()
    }
}

fn distinct_by_text(questions: &[Question]) -> Vec<&Question> {
    let mut seen = HashSet::new();
    questions
        .iter()
        .filter(|question| seen.insert(question.text.as_str()))
        .collect()
}
