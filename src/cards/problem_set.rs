//! The three cards on the table.
//!
//! Answers are drawn without replacement from 1..=9 with a Fisher-Yates
//! shuffle driven by the injected random source, so the three answers are
//! always pairwise distinct.

use serde::{Deserialize, Serialize};

use super::Card;
use crate::core::RandomSource;
use crate::effects::EffectGenerator;
use crate::equations::EquationGenerator;

/// Number of cards dealt at a time.
pub const CARDS_PER_SET: usize = 3;

/// Exactly three cards with distinct answers.
///
/// Serialized as a plain array of cards. Deserialization goes through
/// `from_cards`, so a decoded set is always valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[Card; CARDS_PER_SET]", into = "[Card; CARDS_PER_SET]")]
pub struct ProblemSet {
    cards: [Card; CARDS_PER_SET],
}

impl ProblemSet {
    /// Deal a fresh set at the given abstraction level.
    pub fn generate<R>(abstraction: u32, effects: &EffectGenerator<'_>, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut answers: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        for i in (1..answers.len()).rev() {
            let j = rng.below(i + 1);
            answers.swap(i, j);
        }

        // Pop from the end, like dealing from the top of a shuffled deck
        let cards = std::array::from_fn(|i| {
            let answer = answers[answers.len() - 1 - i];
            Card {
                equation: EquationGenerator::generate(answer, abstraction, rng),
                answer,
                effects: effects.generate(rng),
            }
        });

        Self { cards }
    }

    /// Build a set from explicit cards. Returns `None` unless the answers
    /// are distinct digits in 1..=9.
    pub fn from_cards(cards: [Card; CARDS_PER_SET]) -> Option<Self> {
        let set = Self { cards };
        set.is_valid().then_some(set)
    }

    /// Card whose answer matches `digit`.
    #[must_use]
    pub fn find(&self, digit: u8) -> Option<&Card> {
        self.cards.iter().find(|card| card.answer == digit)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card; CARDS_PER_SET] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The three answers in display order.
    #[must_use]
    pub fn answers(&self) -> [u8; CARDS_PER_SET] {
        std::array::from_fn(|i| self.cards[i].answer)
    }

    /// Distinct answers, each a digit 1..=9.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let answers = self.answers();
        answers.iter().all(|a| (1..=9).contains(a))
            && answers[0] != answers[1]
            && answers[0] != answers[2]
            && answers[1] != answers[2]
    }
}

impl TryFrom<[Card; CARDS_PER_SET]> for ProblemSet {
    type Error = String;

    fn try_from(cards: [Card; CARDS_PER_SET]) -> Result<Self, Self::Error> {
        let answers: Vec<u8> = cards.iter().map(|card| card.answer).collect();
        Self::from_cards(cards)
            .ok_or_else(|| format!("problem set answers {answers:?} are not distinct digits 1-9"))
    }
}

impl From<ProblemSet> for [Card; CARDS_PER_SET] {
    fn from(set: ProblemSet) -> Self {
        set.cards
    }
}

impl<'a> IntoIterator for &'a ProblemSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
