//! A single puzzle card.

use serde::{Deserialize, Serialize};

use crate::effects::EffectList;

/// One equation/answer/effects triple on the table.
///
/// The player resolves a card by submitting its `answer`; the card's
/// effects are then applied to the tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Display text, e.g. `(6 ÷ 3) + 5`.
    pub equation: String,
    /// Digit in 1..=9 the equation evaluates to.
    pub answer: u8,
    pub effects: EffectList,
}

impl Card {
    pub fn new(equation: impl Into<String>, answer: u8, effects: EffectList) -> Self {
        Self {
            equation: equation.into(),
            answer,
            effects,
        }
    }

    /// Effect text lines for display.
    pub fn effect_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.effects.iter().map(ToString::to_string)
    }
}
