//! Game rules: dealing and answer submission.
//!
//! `PuzzleRules` holds the configuration and exposes transitions that take a
//! state and return a new one:
//! - `new_game`: Fresh paused state with a dealt problem set
//! - `deal`: A problem set at a given abstraction
//! - `submit`: Score a submitted digit and advance the game
//!
//! Randomness is always passed in, so a seeded `GameRng` replays a game
//! exactly.

use serde::{Deserialize, Serialize};

use crate::cards::ProblemSet;
use crate::core::{GameConfig, GameState, RandomSource, ResamplePolicy, SubmissionRecord};
use crate::effects::{EffectGenerator, EffectResolver, ResolveResult};
use crate::scoring;

/// Why a submission had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    Paused,
    /// Not a digit in 1..=9.
    OutOfRange,
}

/// What a submission did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// No state change.
    Ignored(IgnoreReason),
    /// A card was solved.
    Solved {
        answer: u8,
        /// Equation of the solved card.
        equation: String,
        gained: f64,
        /// Card effects that were cut short by a tuning limit.
        clamped: usize,
    },
    /// No card had this answer.
    Missed {
        digit: u8,
        /// Score actually lost after the zero floor.
        lost: f64,
    },
}

impl Outcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

/// Result of `PuzzleRules::submit`.
#[derive(Clone, Debug)]
pub struct Transition {
    /// State after the submission.
    pub state: GameState,
    pub outcome: Outcome,
    /// Best score was raised by this submission.
    pub new_best: bool,
    /// Score is at or past the victory threshold.
    pub victory: bool,
}

/// Rules engine for the puzzle.
#[derive(Clone, Debug, Default)]
pub struct PuzzleRules {
    config: GameConfig,
}

impl PuzzleRules {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Deal a problem set at the given abstraction.
    pub fn deal<R>(&self, abstraction: u32, rng: &mut R) -> ProblemSet
    where
        R: RandomSource + ?Sized,
    {
        let effects = EffectGenerator::new(&self.config.effects);
        let set = ProblemSet::generate(abstraction, &effects, rng);
        tracing::debug!(abstraction, answers = ?set.answers(), "dealt problem set");
        set
    }

    /// Create a paused game with a dealt problem set and a fresh RGB sample.
    pub fn new_game<R>(&self, best_score: f64, started_at_ms: u64, rng: &mut R) -> GameState
    where
        R: RandomSource + ?Sized,
    {
        let start = &self.config.start;
        let cards = self.deal(start.abstraction, rng);
        let mut state = GameState::new(start, cards, best_score, started_at_ms);
        state.rgb = scoring::sample_rgb(&state.tuning.bounds, rng);
        state
    }

    /// Submit a digit.
    ///
    /// Ignored while paused or for anything but 1..=9. A matching card adds
    /// the current value, applies the card's effects, and deals a new set.
    /// A miss subtracts `penalty_ratio` of the current value, floored at 0.
    pub fn submit<R>(&self, state: &GameState, digit: i64, rng: &mut R) -> Transition
    where
        R: RandomSource + ?Sized,
    {
        let ignored = |reason| Transition {
            state: state.clone(),
            outcome: Outcome::Ignored(reason),
            new_best: false,
            victory: self.is_victory(state),
        };

        if state.paused {
            return ignored(IgnoreReason::Paused);
        }
        let digit = match u8::try_from(digit) {
            Ok(d @ 1..=9) => d,
            _ => return ignored(IgnoreReason::OutOfRange),
        };

        let mut next = state.clone();
        let value = state.current_value();

        let outcome = match state.cards.find(digit) {
            Some(card) => {
                next.score += value;
                next.problems_solved += 1;
                let clamped = EffectResolver::resolve_all(&mut next.tuning, &card.effects)
                    .iter()
                    .filter(|result| matches!(result, ResolveResult::Clamped { .. }))
                    .count();
                if clamped > 0 {
                    tracing::debug!(clamped, tuning = ?next.tuning, "card effects clamped");
                }
                next.cards = self.deal(next.tuning.abstraction, rng);
                next.rgb = scoring::sample_rgb(&next.tuning.bounds, rng);
                next.history.push_back(SubmissionRecord {
                    digit,
                    solved: true,
                    score_delta: value,
                });
                Outcome::Solved {
                    answer: digit,
                    equation: card.equation.clone(),
                    gained: value,
                    clamped,
                }
            }
            None => {
                let penalty = value * self.config.session.penalty_ratio;
                next.score = (next.score - penalty).max(0.0);
                let lost = state.score - next.score;
                if self.config.session.resample == ResamplePolicy::EverySubmission {
                    next.rgb = scoring::sample_rgb(&next.tuning.bounds, rng);
                }
                next.history.push_back(SubmissionRecord {
                    digit,
                    solved: false,
                    score_delta: -lost,
                });
                Outcome::Missed { digit, lost }
            }
        };

        let new_best = next.score > next.best_score;
        if new_best {
            next.best_score = next.score;
        }
        let victory = self.is_victory(&next);

        Transition {
            state: next,
            outcome,
            new_best,
            victory,
        }
    }

    /// Score has reached the victory threshold.
    #[must_use]
    pub fn is_victory(&self, state: &GameState) -> bool {
        state.score >= self.config.session.victory_threshold
    }
}
