//! Rank titles shown next to the score.

use serde::{Deserialize, Serialize};

/// Player rank, derived from the current score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Apprentice,
    Adept,
    Journeyman,
    Expert,
    Grandmaster,
}

impl Rank {
    /// Score at which each rank begins, highest first.
    const THRESHOLDS: [(f64, Rank); 4] = [
        (10_000.0, Rank::Grandmaster),
        (5_000.0, Rank::Expert),
        (2_000.0, Rank::Journeyman),
        (500.0, Rank::Adept),
    ];

    #[must_use]
    pub fn for_score(score: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map_or(Rank::Apprentice, |(_, rank)| *rank)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Rank::Apprentice => "APPRENTICE",
            Rank::Adept => "ADEPT",
            Rank::Journeyman => "JOURNEYMAN",
            Rank::Expert => "EXPERT",
            Rank::Grandmaster => "GRANDMASTER",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
