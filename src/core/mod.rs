//! Core engine types: channels, state, RNG, configuration.
//!
//! This module contains the data the generators and rules operate on.
//! Balance values are supplied via `GameConfig` rather than hardcoded.

pub mod channel;
pub mod rng;
pub mod config;
pub mod state;

pub use channel::{Channel, ChannelMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{ConfigError, EffectConfig, GameConfig, ResamplePolicy, SessionConfig, Span, StartConfig};
pub use state::{Bound, Bounds, Coefficients, GameState, Rgb, SubmissionRecord, Tuning, CHANNEL_LIMIT};
