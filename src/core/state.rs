//! Game state: tuning parameters and session progress.
//!
//! ## Tuning
//!
//! The parameters card effects act on:
//! - Scoring coefficients per channel, each in [0, 1]
//! - Sampling bounds per channel, `0 <= min <= max <= 255`
//! - Abstraction level (equation difficulty)
//!
//! ## GameState
//!
//! Complete snapshot handed to display layers:
//! - Tuning
//! - Score, best score, problems solved
//! - Active problem set and RGB sample
//! - Pause flag and elapsed-time anchor
//! - Submission history
//!
//! State is only changed by `PuzzleRules` transitions, which take a state and
//! return a new one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::channel::ChannelMap;
use super::config::StartConfig;
use crate::cards::ProblemSet;
use crate::scoring;

/// Largest value a channel bound may take.
pub const CHANNEL_LIMIT: f64 = 255.0;

/// Sampling range for one channel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    /// Create a bound. Panics in debug builds if the range is invalid.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let bound = Self { min, max };
        debug_assert!(bound.is_valid(), "invalid bound [{min}, {max}]");
        bound
    }

    /// `0 <= min <= max <= 255`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        0.0 <= self.min && self.min <= self.max && self.max <= CHANNEL_LIMIT
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Scoring weight per channel.
pub type Coefficients = ChannelMap<f64>;

/// Sampling range per channel.
pub type Bounds = ChannelMap<Bound>;

/// A sampled RGB triple.
pub type Rgb = ChannelMap<f64>;

/// Parameters card effects modify.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub coefficients: Coefficients,
    pub bounds: Bounds,
    pub abstraction: u32,
}

impl Tuning {
    #[must_use]
    pub fn from_start(start: &StartConfig) -> Self {
        Self {
            coefficients: start.coefficients,
            bounds: start.bounds,
            abstraction: start.abstraction,
        }
    }

    /// Check the coefficient and bound invariants.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.coefficients.iter().all(|(_, c)| (0.0..=1.0).contains(c))
            && self.bounds.iter().all(|(_, b)| b.is_valid())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_start(&StartConfig::default())
    }
}

/// One accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub digit: u8,
    pub solved: bool,
    /// Signed score change actually applied (after the zero floor).
    pub score_delta: f64,
}

/// Complete game state.
///
/// Uses `im::Vector` for the history so snapshots handed to display layers
/// clone in O(1).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,

    pub score: f64,
    pub best_score: f64,
    pub problems_solved: u32,

    /// The three cards currently on the table.
    pub cards: ProblemSet,

    /// RGB sample the next submission is scored against.
    pub rgb: Rgb,

    /// Submissions are ignored while paused.
    pub paused: bool,

    /// Clock reading when the session started.
    pub started_at_ms: u64,

    pub history: Vector<SubmissionRecord>,
}

impl GameState {
    /// Create a paused game with the configured starting tuning.
    #[must_use]
    pub fn new(start: &StartConfig, cards: ProblemSet, best_score: f64, started_at_ms: u64) -> Self {
        Self {
            tuning: Tuning::from_start(start),
            score: 0.0,
            best_score,
            problems_solved: 0,
            cards,
            rgb: start.rgb,
            paused: true,
            started_at_ms,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn abstraction(&self) -> u32 {
        self.tuning.abstraction
    }

    /// Value a correct answer would add right now.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        scoring::evaluate(&self.rgb, &self.tuning.coefficients)
    }

    /// Number of incorrect submissions so far.
    #[must_use]
    pub fn misses(&self) -> usize {
        self.history.iter().filter(|r| !r.solved).count()
    }
}
