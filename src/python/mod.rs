//! Python bindings for the puzzle engine.
//!
//! Lets a Python front end drive a session without reimplementing the rules.
//!
//! # Quick Start
//!
//! ```python
//! import rgba_puzzle
//!
//! session = rgba_puzzle.Session(seed=42, store_path="prefs.json")
//! if session.start():
//!     show_tutorial()
//!
//! for card in session.cards:
//!     print(card.equation, card.effects)
//!
//! kind, delta = session.submit(session.cards[0].answer)
//! print(kind, delta, session.score, session.rank)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_session;

pub use py_cards::*;
pub use py_session::*;

/// rgba_puzzle: RGB arithmetic puzzle engine.
#[pymodule]
fn rgba_puzzle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySession>()?;
    Ok(())
}
