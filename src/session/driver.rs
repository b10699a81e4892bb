//! Host-facing session: owns the state and everything around it.
//!
//! Display and input layers hold a `Session`, feed it input events, and
//! re-render from the returned snapshot. The session threads its RNG through
//! `PuzzleRules`, persists the best score and flags to its store, and logs
//! what happened.

use std::time::Duration;

use crate::core::{GameConfig, GameRng, GameState};
use crate::rules::{IgnoreReason, Outcome, PuzzleRules, Transition};
use crate::scoring::Rank;

use super::clock::{Clock, SystemClock};
use super::snapshot::{SessionSnapshot, SnapshotError};
use super::store::{KeyValueStore, Preferences, ACCESSIBILITY_KEY, BEST_SCORE_KEY, HAS_PLAYED_KEY};

/// A single player's game.
pub struct Session<S, C = SystemClock> {
    rules: PuzzleRules,
    state: GameState,
    rng: GameRng,
    store: S,
    clock: C,
    accessibility_mode: bool,
    has_played: bool,
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    /// Create a paused session, reading preferences from `store`.
    pub fn new(config: GameConfig, seed: u64, store: S, clock: C) -> Self {
        let prefs = Preferences::load(&store);
        let rules = PuzzleRules::new(config);
        let mut rng = GameRng::new(seed);
        let state = rules.new_game(prefs.best_score, clock.now_ms(), &mut rng);

        tracing::info!(seed, best_score = prefs.best_score, "session created");

        Self {
            rules,
            state,
            rng,
            store,
            clock,
            accessibility_mode: prefs.accessibility_mode,
            has_played: prefs.has_played,
        }
    }

    /// Unpause for the first time. Returns `true` if this player has never
    /// played before, in which case the host should show the tutorial.
    pub fn start(&mut self) -> bool {
        self.state.paused = false;
        let first_run = !self.has_played;
        if first_run {
            self.has_played = true;
            self.persist(HAS_PLAYED_KEY, "true");
        }
        tracing::info!(first_run, "session started");
        first_run
    }

    pub fn pause(&mut self) {
        self.state.paused = true;
    }

    pub fn resume(&mut self) {
        self.state.paused = false;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.paused = !self.state.paused;
        self.state.paused
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Submit a digit and return the resulting transition.
    pub fn submit_answer(&mut self, digit: i64) -> Transition {
        let was_victory = self.rules.is_victory(&self.state);
        let transition = self.rules.submit(&self.state, digit, &mut self.rng);

        match &transition.outcome {
            Outcome::Solved { answer, gained, .. } => {
                tracing::info!(
                    answer,
                    gained,
                    score = transition.state.score,
                    abstraction = transition.state.abstraction(),
                    "card solved"
                );
            }
            Outcome::Missed { digit, lost } => {
                tracing::info!(digit, lost, score = transition.state.score, "wrong answer");
            }
            Outcome::Ignored(reason) => {
                tracing::debug!(?reason, digit, "submission ignored");
            }
        }

        if transition.new_best {
            tracing::debug!(best_score = transition.state.best_score, "new best score");
            self.persist(BEST_SCORE_KEY, &transition.state.best_score.to_string());
        }
        if transition.victory && !was_victory {
            tracing::info!(score = transition.state.score, "victory threshold reached");
        }

        self.state = transition.state.clone();
        transition
    }

    /// Submit a keypress. Keys other than '1'..='9' are ignored.
    pub fn submit_key(&mut self, key: char) -> Transition {
        match key.to_digit(10) {
            Some(digit) => self.submit_answer(i64::from(digit)),
            None => Transition {
                state: self.state.clone(),
                outcome: Outcome::Ignored(IgnoreReason::OutOfRange),
                new_best: false,
                victory: self.rules.is_victory(&self.state),
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &PuzzleRules {
        &self.rules
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank::for_score(self.state.score)
    }

    /// Live preview of what a correct answer is worth.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.state.current_value()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.clock.now_ms().saturating_sub(self.state.started_at_ms))
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{}:{:02}", secs / 60, secs % 60)
    }

    #[must_use]
    pub fn accessibility_mode(&self) -> bool {
        self.accessibility_mode
    }

    pub fn set_accessibility_mode(&mut self, enabled: bool) {
        self.accessibility_mode = enabled;
        self.persist(ACCESSIBILITY_KEY, if enabled { "true" } else { "false" });
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Encode the state and RNG position.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        SessionSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
            elapsed_ms: self.clock.now_ms().saturating_sub(self.state.started_at_ms),
        }
        .to_bytes()
    }

    /// Replace the state with a snapshot. Elapsed time carries over.
    ///
    /// The stored best score wins if it is higher than the snapshot's.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let snapshot = SessionSnapshot::from_bytes(bytes)?;
        let best_score = self.state.best_score;

        self.state = snapshot.state;
        self.state.started_at_ms = self.clock.now_ms().saturating_sub(snapshot.elapsed_ms);
        self.state.best_score = self.state.best_score.max(best_score);
        self.rng = GameRng::from_state(&snapshot.rng);

        tracing::info!(
            seed = self.rng.seed(),
            score = self.state.score,
            problems_solved = self.state.problems_solved,
            "session restored"
        );
        Ok(())
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, error = %err, "failed to persist preference");
        }
    }
}
