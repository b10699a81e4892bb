//! # rgba-puzzle
//!
//! Procedural difficulty and economy engine for an RGB arithmetic puzzle.
//!
//! Each round deals three cards. Every card shows an equation that evaluates
//! to a distinct digit 1-9 and carries small rewards. Typing a card's digit
//! scores the current RGB sample, applies the card's rewards, and deals a new
//! set. Rewards tune the scoring coefficients, the sampling bounds, and the
//! abstraction level that controls how hard equations get.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every generator takes a `RandomSource`. A
//!    seeded `GameRng` replays a session exactly; tests script the draws.
//!
//! 2. **Pure Transitions**: `PuzzleRules` takes a state and returns a new
//!    one. Hosts re-render from the returned snapshot.
//!
//! 3. **Configuration Over Convention**: Starting values and effect balance
//!    live in `GameConfig`, loadable from TOML.
//!
//! ## Modules
//!
//! - `core`: Channels, tuning, state, RNG, configuration
//! - `equations`: Equation generation and exact evaluation
//! - `effects`: Card reward generation and clamped application
//! - `cards`: Cards and problem sets
//! - `scoring`: RGB sampling, evaluation, ranks
//! - `rules`: Submission transitions
//! - `session`: Host-facing session with persistence and snapshots

pub mod core;
pub mod equations;
pub mod effects;
pub mod cards;
pub mod scoring;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Channel, ChannelMap,
    GameRng, GameRngState, RandomSource,
    GameConfig, ConfigError,
    Bound, GameState, Tuning,
};

pub use crate::equations::{EquationGenerator, Equation, Tier};

pub use crate::effects::{Effect, EffectGenerator, EffectResolver};

pub use crate::cards::{Card, ProblemSet};

pub use crate::scoring::Rank;

pub use crate::rules::{Outcome, PuzzleRules, Transition};

pub use crate::session::{
    Clock, SystemClock, ManualClock,
    KeyValueStore, MemoryStore, FileStore,
    Session, SnapshotError,
};
