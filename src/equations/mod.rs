//! Equation generation and checking.
//!
//! - `Tier`: Operation bands derived from the abstraction level
//! - `EquationGenerator`: Builds display equations for a target digit
//! - `evaluate`: Exact rational evaluation of display equations
//!
//! Generated text uses `×` and `÷` for display. The evaluator accepts those
//! and their ASCII forms, so the equality invariant can be checked on the
//! exact string a player sees.

mod eval;
mod generator;
mod tier;

pub use eval::{evaluate, EvalError, Rational};
pub use generator::{max_depth, Equation, EquationGenerator};
pub use tier::Tier;
