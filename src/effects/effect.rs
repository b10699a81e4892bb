//! Effect definitions.
//!
//! Effects are the rewards (and occasional penalties) printed on a card.
//! Solving the card applies them to the game's `Tuning`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Channel;

/// A single card effect.
///
/// ## Tuning Effects
///
/// - `Coefficient`: Nudge a channel's scoring weight
/// - `BoundMin` / `BoundMax`: Nudge one end of a channel's sampling range
///
/// ## Difficulty Effects
///
/// - `AbstractionDelta`: Raise the abstraction level, making equations harder
///
/// Deltas are requested changes; `EffectResolver` clamps them on application.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Add `delta` to a coefficient (fraction, 0.01 = 1%).
    Coefficient {
        channel: Channel,
        delta: f64,
    },

    /// Add `delta` to a channel's lower bound.
    BoundMin {
        channel: Channel,
        delta: f64,
    },

    /// Add `delta` to a channel's upper bound.
    BoundMax {
        channel: Channel,
        delta: f64,
    },

    /// Raise the abstraction level.
    AbstractionDelta {
        amount: u32,
    },
}

/// Effects on one card. Cards carry at most two.
pub type EffectList = SmallVec<[Effect; 2]>;

/// Effect variant without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Coefficient,
    BoundMin,
    BoundMax,
    Abstraction,
}

impl Effect {
    /// Create a coefficient effect.
    pub fn coefficient(channel: Channel, delta: f64) -> Self {
        Self::Coefficient { channel, delta }
    }

    /// Create a lower-bound effect.
    pub fn bound_min(channel: Channel, delta: f64) -> Self {
        Self::BoundMin { channel, delta }
    }

    /// Create an upper-bound effect.
    pub fn bound_max(channel: Channel, delta: f64) -> Self {
        Self::BoundMax { channel, delta }
    }

    /// Create an abstraction effect.
    pub fn abstraction(amount: u32) -> Self {
        Self::AbstractionDelta { amount }
    }

    #[must_use]
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Coefficient { .. } => EffectKind::Coefficient,
            Effect::BoundMin { .. } => EffectKind::BoundMin,
            Effect::BoundMax { .. } => EffectKind::BoundMax,
            Effect::AbstractionDelta { .. } => EffectKind::Abstraction,
        }
    }

    /// Channel the effect targets, if any.
    #[must_use]
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Effect::Coefficient { channel, .. }
            | Effect::BoundMin { channel, .. }
            | Effect::BoundMax { channel, .. } => Some(*channel),
            Effect::AbstractionDelta { .. } => None,
        }
    }
}

/// Card text, e.g. `+3% R Coeff`, `-1.2 G Min`, `+1 Abstraction`.
impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Coefficient { channel, delta } => {
                // Halves round toward positive infinity
                let percent = (delta * 100.0 + 0.5).floor() as i64;
                write!(f, "{:+}% {} Coeff", percent, channel)
            }
            Effect::BoundMin { channel, delta } => write!(f, "{:+.1} {} Min", delta, channel),
            Effect::BoundMax { channel, delta } => write!(f, "{:+.1} {} Max", delta, channel),
            Effect::AbstractionDelta { amount } => write!(f, "+{} Abstraction", amount),
        }
    }
}
