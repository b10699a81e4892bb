//! Rules for the puzzle game.
//!
//! `PuzzleRules` owns the configuration and implements the transitions.
//! It never holds game state; callers pass a state in and get a new one out.

mod engine;

pub use engine::{IgnoreReason, Outcome, PuzzleRules, Transition};
