//! Equation generation for a target digit.
//!
//! The abstraction level selects a `Tier`. Each tier either emits its own
//! operation or falls back to a strictly lower abstraction level, so every
//! recursive path terminates. All descents go through `descend`, which
//! asserts the decrease.

use serde::{Deserialize, Serialize};

use super::eval::{evaluate, Rational};
use super::tier::Tier;
use crate::core::RandomSource;

/// Level a multiplicative prime falls back to.
const PRIME_FALLBACK: u32 = 1;
/// Level the divisive tier falls back to when it skips division.
const DIVISION_FALLBACK: u32 = 3;
/// Levels dropped when building a nested sub-equation.
const NESTING_STEP: u32 = 3;

/// A generated equation and how it was built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    /// Display text using `×` and `÷`.
    pub text: String,
    /// Value the text evaluates to.
    pub answer: u8,
    /// Longest chain of tier descents taken while building.
    pub depth: u32,
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Upper bound on `Equation::depth` for an abstraction level.
///
/// Nested tiers step down by three; at most two fallback steps
/// (divisive to multiplicative to additive) follow.
#[must_use]
pub const fn max_depth(abstraction: u32) -> u32 {
    abstraction / NESTING_STEP + 2
}

/// Builds equations whose value is a given digit.
pub struct EquationGenerator;

impl EquationGenerator {
    /// Generate display text that evaluates to `answer`.
    ///
    /// Panics if `answer` is not in 1..=9.
    pub fn generate<R>(answer: u8, abstraction: u32, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        Self::generate_traced(answer, abstraction, rng).text
    }

    /// Generate an equation along with its recursion depth.
    pub fn generate_traced<R>(answer: u8, abstraction: u32, rng: &mut R) -> Equation
    where
        R: RandomSource + ?Sized,
    {
        assert!((1..=9).contains(&answer), "answer must be a digit 1-9, got {answer}");

        let equation = Self::build(answer, abstraction, 0, rng);

        debug_assert_eq!(
            evaluate(&equation.text).ok().and_then(Rational::as_integer),
            Some(i64::from(answer)),
            "equation {:?} does not evaluate to {}",
            equation.text,
            answer
        );
        debug_assert!(equation.depth <= max_depth(abstraction));

        equation
    }

    fn build<R>(answer: u8, abstraction: u32, depth: u32, rng: &mut R) -> Equation
    where
        R: RandomSource + ?Sized,
    {
        if answer == 1 {
            return Self::unit(abstraction, depth, rng);
        }

        match Tier::of(abstraction) {
            Tier::Additive => Self::additive(answer, depth, rng),
            Tier::Multiplicative => {
                let factors: Vec<u8> = (2..=answer)
                    .take_while(|f| f * f <= answer)
                    .filter(|f| answer % f == 0)
                    .collect();
                if factors.is_empty() {
                    return Self::descend(answer, abstraction, PRIME_FALLBACK, depth, rng);
                }
                let factor = factors[rng.below(factors.len())];
                let quotient = answer / factor;
                let text = if rng.chance(0.5) {
                    format!("{quotient} × {factor}")
                } else {
                    format!("{factor} × {quotient}")
                };
                Equation { text, answer, depth }
            }
            Tier::Divisive => {
                if rng.chance(0.5) {
                    let divisor = rng.int_inclusive(2, 5);
                    let dividend = i64::from(answer) * divisor;
                    Equation {
                        text: format!("{dividend} ÷ {divisor}"),
                        answer,
                        depth,
                    }
                } else {
                    Self::descend(answer, abstraction, DIVISION_FALLBACK, depth, rng)
                }
            }
            Tier::Nested => {
                let upper = i64::from(answer).saturating_sub(2).max(1);
                let split = rng.int_inclusive(1, upper) as u8;
                let inner = Self::descend(split, abstraction, abstraction - NESTING_STEP, depth, rng);
                Equation {
                    text: format!("({}) + {}", inner.text, answer - split),
                    answer,
                    depth: inner.depth,
                }
            }
        }
    }

    /// Recurse at a strictly lower abstraction level.
    fn descend<R>(answer: u8, from: u32, to: u32, depth: u32, rng: &mut R) -> Equation
    where
        R: RandomSource + ?Sized,
    {
        assert!(to < from, "equation recursion must lower abstraction ({from} -> {to})");
        Self::build(answer, to, depth + 1, rng)
    }

    /// `N - (N-1)` below the multiplicative tier, `N ÷ N` from there on.
    fn unit<R>(abstraction: u32, depth: u32, rng: &mut R) -> Equation
    where
        R: RandomSource + ?Sized,
    {
        let n = rng.int_inclusive(2, 9);
        let text = if Tier::of(abstraction) == Tier::Additive {
            format!("{} - {}", n, n - 1)
        } else {
            format!("{n} ÷ {n}")
        };
        Equation { text, answer: 1, depth }
    }

    fn additive<R>(answer: u8, depth: u32, rng: &mut R) -> Equation
    where
        R: RandomSource + ?Sized,
    {
        let a = rng.int_inclusive(1, i64::from(answer) - 1);
        let answer_i = i64::from(answer);
        let text = if rng.chance(0.5) {
            format!("{} + {}", a, answer_i - a)
        } else {
            format!("{} - {}", answer_i + a, a)
        };
        Equation { text, answer, depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    /// Replays a fixed list of draws.
    struct Scripted(std::vec::IntoIter<f64>);

    impl Scripted {
        fn new(draws: &[f64]) -> Self {
            Self(draws.to_vec().into_iter())
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.0.next().expect("script exhausted")
        }
    }

    #[test]
    fn test_unit_subtraction() {
        // n = 2 + floor(0.4 * 8) = 5
        let mut rng = Scripted::new(&[0.4]);
        assert_eq!(EquationGenerator::generate(1, 0, &mut rng), "5 - 4");
    }

    #[test]
    fn test_unit_self_division() {
        let mut rng = Scripted::new(&[0.0]);
        assert_eq!(EquationGenerator::generate(1, 2, &mut rng), "2 ÷ 2");
    }

    #[test]
    fn test_additive_forms() {
        // a = 1 + floor(0.5 * 6) = 4, then addition
        let mut rng = Scripted::new(&[0.5, 0.1]);
        assert_eq!(EquationGenerator::generate(7, 0, &mut rng), "4 + 3");

        // a = 4, then subtraction
        let mut rng = Scripted::new(&[0.5, 0.9]);
        assert_eq!(EquationGenerator::generate(7, 1, &mut rng), "11 - 4");
    }

    #[test]
    fn test_multiplicative_six() {
        // 2 is the only factor of 6 up to its square root, so only the
        // operand order is drawn
        let mut rng = Scripted::new(&[0.1]);
        assert_eq!(EquationGenerator::generate(6, 2, &mut rng), "3 × 2");

        let mut rng = Scripted::new(&[0.9]);
        assert_eq!(EquationGenerator::generate(6, 3, &mut rng), "2 × 3");
    }

    #[test]
    fn test_multiplicative_prime_falls_back() {
        let mut rng = Scripted::new(&[0.0, 0.1]);
        let equation = EquationGenerator::generate_traced(7, 3, &mut rng);

        assert_eq!(equation.text, "1 + 6");
        assert_eq!(equation.depth, 1);
    }

    #[test]
    fn test_divisive_emits_division() {
        // division chosen, divisor = 2 + floor(0.75 * 4) = 5
        let mut rng = Scripted::new(&[0.1, 0.75]);
        assert_eq!(EquationGenerator::generate(4, 4, &mut rng), "20 ÷ 5");
    }

    #[test]
    fn test_divisive_falls_back_twice_for_primes() {
        // skip division -> level 3, prime -> level 1, a = 1, addition
        let mut rng = Scripted::new(&[0.9, 0.0, 0.1]);
        let equation = EquationGenerator::generate_traced(5, 5, &mut rng);

        assert_eq!(equation.text, "1 + 4");
        assert_eq!(equation.depth, 2);
    }

    #[test]
    fn test_nested_wraps_sub_equation() {
        // split = 1 + floor(0.99 * 7) = 7, inner at level 3: 7 is prime -> level 1
        let mut rng = Scripted::new(&[0.99, 0.0, 0.1]);
        let equation = EquationGenerator::generate_traced(9, 6, &mut rng);

        assert_eq!(equation.text, "(1 + 6) + 2");
        assert_eq!(equation.depth, 2);
    }

    #[test]
    fn test_nested_two() {
        // The only split for 2 is 1 + 1, drawn without consuming a value
        let mut rng = Scripted::new(&[0.0]);
        assert_eq!(EquationGenerator::generate(2, 6, &mut rng), "(2 ÷ 2) + 1");
    }

    #[test]
    fn test_depth_bound_and_value() {
        let mut rng = GameRng::new(99);
        for abstraction in 0..=15 {
            for answer in 1..=9 {
                let equation = EquationGenerator::generate_traced(answer, abstraction, &mut rng);
                assert!(equation.depth <= max_depth(abstraction));
                assert_eq!(
                    evaluate(&equation.text).unwrap().as_integer(),
                    Some(i64::from(answer)),
                    "{}",
                    equation
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "answer must be a digit")]
    fn test_rejects_zero() {
        let mut rng = GameRng::new(1);
        EquationGenerator::generate(0, 0, &mut rng);
    }
}
