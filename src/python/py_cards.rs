//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;

/// Python wrapper for a dealt card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Display equation, e.g. "(6 ÷ 3) + 5".
    #[getter]
    fn equation(&self) -> String {
        self.0.equation.clone()
    }

    #[getter]
    fn answer(&self) -> u8 {
        self.0.answer
    }

    /// Effect text lines, e.g. ["+3% R Coeff", "+1 Abstraction"].
    #[getter]
    fn effects(&self) -> Vec<String> {
        self.0.effect_lines().collect()
    }

    fn __repr__(&self) -> String {
        format!("Card({:?}, effects={:?})", self.0.equation, self.effects())
    }
}
