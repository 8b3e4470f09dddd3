use engvocab_game::{BankSource, CorpusError, QuestionBank, QuestionTracker, Tier};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

const CORPUS: &str = include_str!("../../engvocab-web/static/english_game_questions.txt");

#[test]
fn shipped_corpus_fills_every_tier() {
    let load = QuestionBank::from_corpus(Ok(CORPUS.to_string()));
    assert_eq!(load.source, BankSource::Corpus);
    assert_eq!(load.bank.tier_counts(), [20, 20, 20]);
    for tier in Tier::ALL {
        let texts: HashSet<_> = load.bank.questions(tier).iter().map(|q| &q.text).collect();
        assert_eq!(texts.len(), 20, "{tier} has duplicate prompts");
    }
}

#[test]
fn shipped_corpus_contains_every_fallback_question() {
    let bank = QuestionBank::parse(CORPUS);
    let fallback = QuestionBank::fallback();
    for tier in Tier::ALL {
        for question in fallback.questions(tier) {
            assert!(bank.questions(tier).contains(question), "{}", question.text);
        }
    }
}

#[test]
fn network_failure_and_blank_corpus_both_fall_back() {
    let offline = QuestionBank::from_corpus(Err(CorpusError::Unavailable("offline".into())));
    assert!(offline.source.is_fallback());
    let blank = QuestionBank::from_corpus(Ok("\n\n".into()));
    assert_eq!(blank.source, BankSource::Fallback(CorpusError::Empty));
}

#[test]
fn a_full_epoch_covers_the_tier_before_repeating() {
    let bank = QuestionBank::parse(CORPUS);
    let mut tracker = QuestionTracker::new();
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let mut seen = HashSet::new();
    for _ in 0..3 {
        for question in tracker.select_fresh_questions(&bank, 2, 5, &mut rng) {
            assert!(seen.insert(question.text));
        }
    }
    assert_eq!(tracker.used_count(Tier::Intermediate), 15);
    assert_eq!(tracker.used_count(Tier::Beginner), 0);
}
