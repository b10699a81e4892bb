//! Cards and problem sets.
//!
//! - `Card`: An equation, the digit it evaluates to, and its effects
//! - `ProblemSet`: The three cards currently on the table

mod card;
mod problem_set;

pub use card::Card;
pub use problem_set::{ProblemSet, CARDS_PER_SET};
