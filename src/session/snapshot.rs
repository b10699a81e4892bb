//! Binary snapshots for suspending and resuming a session.
//!
//! A snapshot captures the game state and the RNG position, so a restored
//! session deals exactly the cards the original would have dealt next.

use serde::{Deserialize, Serialize};

use crate::core::{GameRngState, GameState};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub rng: GameRngState,
    /// Elapsed play time when the snapshot was taken.
    pub elapsed_ms: u64,
}

impl SessionSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject states no sequence of transitions could have produced.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let state = &self.state;
        if !state.cards.is_valid() {
            return Err(SnapshotError::Invalid(format!(
                "problem set answers {:?} are not distinct digits 1-9",
                state.cards.answers()
            )));
        }
        if !state.tuning.is_valid() {
            return Err(SnapshotError::Invalid(format!(
                "tuning out of range: {:?}",
                state.tuning
            )));
        }
        for (name, value) in [("score", state.score), ("best score", state.best_score)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SnapshotError::Invalid(format!("{name} {value} is negative or not finite")));
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum SnapshotError {
    Codec(bincode::Error),
    /// Decoded, but the state breaks a game invariant.
    Invalid(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Codec(err) => write!(f, "Snapshot codec error: {}", err),
            SnapshotError::Invalid(msg) => write!(f, "Invalid snapshot: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<bincode::Error> for SnapshotError {
    fn from(value: bincode::Error) -> Self {
        SnapshotError::Codec(value)
    }
}
