//! Session scenario tests.
//!
//! Drive a full session the way a host would: start, answer, miss, pause,
//! snapshot, and reopen with persisted preferences.

use std::time::Duration;

use rgba_puzzle::core::{GameConfig, ResamplePolicy};
use rgba_puzzle::rules::{IgnoreReason, Outcome};
use rgba_puzzle::session::{
    FileStore, KeyValueStore, ManualClock, MemoryStore, Session, BEST_SCORE_KEY,
};
use rgba_puzzle::Rank;

fn started(seed: u64) -> Session<MemoryStore, ManualClock> {
    let mut session = Session::new(GameConfig::default(), seed, MemoryStore::new(), ManualClock::new(0));
    session.start();
    session
}

fn wrong_digit<S: KeyValueStore>(session: &Session<S, ManualClock>) -> i64 {
    let answers = session.state().cards.answers();
    (1..=9).find(|d| !answers.contains(d)).map(i64::from).unwrap()
}

// =============================================================================
// Play Scenarios
// =============================================================================

/// Solving a run of cards raises the solved count and redeals each time.
#[test]
fn test_solve_streak() {
    let mut session = started(11);

    for expected in 1..=25 {
        let before = session.state().cards.clone();
        let answer = before.answers()[expected as usize % 3];

        let transition = session.submit_answer(i64::from(answer));

        assert!(transition.outcome.is_solved());
        assert_eq!(session.state().problems_solved, expected);
        assert!(session.state().cards.is_valid());
        assert!(session.state().tuning.is_valid());
        assert_eq!(session.state().best_score, session.state().score);
    }
}

/// Alternating misses and solves never push the score below zero.
#[test]
fn test_score_never_negative() {
    let mut session = started(12);

    for round in 0..200 {
        let digit = if round % 3 == 0 {
            i64::from(session.state().cards.answers()[0])
        } else {
            wrong_digit(&session)
        };
        session.submit_answer(digit);

        assert!(session.state().score >= 0.0);
        assert!(session.state().best_score >= session.state().score);
    }
}

/// A miss keeps the cards but, by default, redraws the RGB sample.
#[test]
fn test_miss_keeps_cards() {
    let mut session = started(13);
    let cards = session.state().cards.clone();

    let transition = session.submit_answer(wrong_digit(&session));

    assert!(matches!(transition.outcome, Outcome::Missed { .. }));
    assert_eq!(session.state().cards, cards);
    assert_eq!(session.state().problems_solved, 0);
    assert_eq!(session.rules().config().session.resample, ResamplePolicy::EverySubmission);
}

/// Paused sessions ignore input until resumed.
#[test]
fn test_pause_and_resume() {
    let mut session = started(14);
    session.pause();

    let answer = i64::from(session.state().cards.answers()[0]);
    let transition = session.submit_answer(answer);
    assert_eq!(transition.outcome, Outcome::Ignored(IgnoreReason::Paused));
    assert_eq!(session.state().problems_solved, 0);

    session.resume();
    assert!(session.submit_answer(answer).outcome.is_solved());
}

/// Rank follows the score thresholds.
#[test]
fn test_rank_progression() {
    assert_eq!(Rank::for_score(0.0), Rank::Apprentice);
    assert_eq!(Rank::for_score(500.0), Rank::Adept);
    assert_eq!(Rank::for_score(2_000.0), Rank::Journeyman);
    assert_eq!(Rank::for_score(5_000.0), Rank::Expert);
    assert_eq!(Rank::for_score(10_000.0), Rank::Grandmaster);

    let session = started(15);
    assert_eq!(session.rank(), Rank::Apprentice);
}

// =============================================================================
// Time and Persistence
// =============================================================================

/// Elapsed time is measured from session creation.
#[test]
fn test_elapsed_time() {
    let session = started(16);
    assert_eq!(session.elapsed_display(), "0:00");

    session.clock().advance(61_000);
    assert_eq!(session.elapsed(), Duration::from_secs(61));
    assert_eq!(session.elapsed_display(), "1:01");

    session.clock().advance(10 * 60_000);
    assert_eq!(session.elapsed_display(), "11:01");
}

/// Best score and the tutorial flag survive reopening a file store.
#[test]
fn test_preferences_survive_restart() {
    let path = std::env::temp_dir().join(format!("rgba-puzzle-session-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let best = {
        let store = FileStore::open(&path).unwrap();
        let mut session = Session::new(GameConfig::default(), 17, store, ManualClock::new(0));
        assert!(session.start());
        let answer = session.state().cards.answers()[0];
        session.submit_answer(i64::from(answer));
        session.state().best_score
    };

    let store = FileStore::open(&path).unwrap();
    assert!(store.get(BEST_SCORE_KEY).is_some());
    let mut session = Session::new(GameConfig::default(), 18, store, ManualClock::new(0));
    assert!(!session.start());
    assert_eq!(session.state().best_score, best);
    assert_eq!(session.state().score, 0.0);

    std::fs::remove_file(&path).unwrap();
}

/// A restored snapshot continues exactly where the original left off.
#[test]
fn test_snapshot_restore_matches_original() {
    let mut original = started(19);
    for _ in 0..5 {
        let answer = original.state().cards.answers()[1];
        original.submit_answer(i64::from(answer));
    }
    let bytes = original.snapshot().unwrap();

    let mut restored = Session::new(GameConfig::default(), 0, MemoryStore::new(), ManualClock::new(0));
    restored.restore(&bytes).unwrap();
    assert_eq!(restored.state().problems_solved, 5);

    for _ in 0..5 {
        let answer = original.state().cards.answers()[2];
        let a = original.submit_answer(i64::from(answer));
        let b = restored.submit_answer(i64::from(answer));

        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.state.cards, b.state.cards);
        assert_eq!(a.state.tuning, b.state.tuning);
    }
}

/// Garbage bytes are rejected without touching the session.
#[test]
fn test_restore_rejects_garbage() {
    let mut session = started(20);
    let cards = session.state().cards.clone();

    assert!(session.restore(&[1, 2, 3]).is_err());
    assert_eq!(session.state().cards, cards);
}
