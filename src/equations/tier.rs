//! Difficulty tiers derived from the abstraction level.

use serde::{Deserialize, Serialize};

/// Operations an equation may use at a given abstraction level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Abstraction 0-1: `a + b`, `a - b`.
    Additive,
    /// Abstraction 2-3: `a × b`, falling back to additive for primes.
    Multiplicative,
    /// Abstraction 4-5: `a ÷ b` half the time, multiplicative otherwise.
    Divisive,
    /// Abstraction 6+: a parenthesized sub-equation from three levels down.
    Nested,
}

impl Tier {
    /// Tier for an abstraction level.
    #[must_use]
    pub const fn of(abstraction: u32) -> Self {
        match abstraction {
            0..=1 => Tier::Additive,
            2..=3 => Tier::Multiplicative,
            4..=5 => Tier::Divisive,
            _ => Tier::Nested,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Additive => "additive",
            Tier::Multiplicative => "multiplicative",
            Tier::Divisive => "divisive",
            Tier::Nested => "nested",
        };
        f.write_str(name)
    }
}
