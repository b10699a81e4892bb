//! Scoring model: RGB sampling, linear evaluation, ranks.

mod model;
mod rank;

pub use model::{evaluate, sample_rgb};
pub use rank::Rank;
