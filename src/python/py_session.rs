//! Session bindings for Python.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::rules::{Outcome, Transition};
use crate::session::{FileStore, KeyValueStore, MemoryStore, Session, SystemClock};

use super::py_cards::PyCard;

/// Python wrapper for a game session.
///
/// Preferences go to a JSON file when `store_path` is given and stay in
/// memory otherwise.
#[pyclass(name = "Session", unsendable)]
pub struct PySession {
    inner: Session<Box<dyn KeyValueStore>, SystemClock>,
}

#[pymethods]
impl PySession {
    /// Create a paused session.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic deals
    /// - config_path: Optional TOML balance file
    /// - store_path: Optional JSON preferences file
    #[new]
    #[pyo3(signature = (seed = 42, config_path = None, store_path = None))]
    fn new(seed: u64, config_path: Option<String>, store_path: Option<String>) -> PyResult<Self> {
        let config = match config_path {
            Some(path) => GameConfig::load_from_file(path)
                .map_err(|err| PyValueError::new_err(err.to_string()))?,
            None => GameConfig::default(),
        };
        let store: Box<dyn KeyValueStore> = match store_path {
            Some(path) => {
                Box::new(FileStore::open(path).map_err(|err| PyIOError::new_err(err.to_string()))?)
            }
            None => Box::new(MemoryStore::new()),
        };
        Ok(Self {
            inner: Session::new(config, seed, store, SystemClock::new()),
        })
    }

    /// Unpause. Returns True if the tutorial should be shown.
    fn start(&mut self) -> bool {
        self.inner.start()
    }

    fn pause(&mut self) {
        self.inner.pause();
    }

    fn resume(&mut self) {
        self.inner.resume();
    }

    fn toggle_pause(&mut self) -> bool {
        self.inner.toggle_pause()
    }

    #[getter]
    fn paused(&self) -> bool {
        self.inner.is_paused()
    }

    /// Submit a digit.
    ///
    /// Returns ("solved", gained), ("missed", lost) or ("ignored", 0.0).
    fn submit(&mut self, digit: i64) -> (&'static str, f64) {
        describe(&self.inner.submit_answer(digit))
    }

    /// Submit a keypress character.
    fn submit_key(&mut self, key: char) -> (&'static str, f64) {
        describe(&self.inner.submit_key(key))
    }

    #[getter]
    fn cards(&self) -> Vec<PyCard> {
        self.inner.state().cards.iter().cloned().map(PyCard).collect()
    }

    #[getter]
    fn rgb(&self) -> (f64, f64, f64) {
        let rgb = &self.inner.state().rgb;
        (rgb.r, rgb.g, rgb.b)
    }

    #[getter]
    fn coefficients(&self) -> (f64, f64, f64) {
        let c = &self.inner.state().tuning.coefficients;
        (c.r, c.g, c.b)
    }

    /// Per-channel (min, max) sampling bounds.
    #[getter]
    fn bounds(&self) -> Vec<(f64, f64)> {
        self.inner
            .state()
            .tuning
            .bounds
            .iter()
            .map(|(_, b)| (b.min, b.max))
            .collect()
    }

    #[getter]
    fn abstraction(&self) -> u32 {
        self.inner.state().abstraction()
    }

    #[getter]
    fn score(&self) -> f64 {
        self.inner.state().score
    }

    #[getter]
    fn best_score(&self) -> f64 {
        self.inner.state().best_score
    }

    #[getter]
    fn problems_solved(&self) -> u32 {
        self.inner.state().problems_solved
    }

    #[getter]
    fn current_value(&self) -> f64 {
        self.inner.current_value()
    }

    #[getter]
    fn rank(&self) -> &'static str {
        self.inner.rank().title()
    }

    /// Elapsed play time as "m:ss".
    #[getter]
    fn elapsed(&self) -> String {
        self.inner.elapsed_display()
    }

    #[getter]
    fn accessibility_mode(&self) -> bool {
        self.inner.accessibility_mode()
    }

    #[setter]
    fn set_accessibility_mode(&mut self, enabled: bool) {
        self.inner.set_accessibility_mode(enabled);
    }

    /// Encode the session for later `restore`.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.inner
            .snapshot()
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    fn restore(&mut self, data: Vec<u8>) -> PyResult<()> {
        self.inner
            .restore(&data)
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "Session(score={:.2}, solved={}, abstraction={}, paused={})",
            state.score,
            state.problems_solved,
            state.abstraction(),
            state.paused
        )
    }
}

fn describe(transition: &Transition) -> (&'static str, f64) {
    match &transition.outcome {
        Outcome::Solved { gained, .. } => ("solved", *gained),
        Outcome::Missed { lost, .. } => ("missed", *lost),
        Outcome::Ignored(_) => ("ignored", 0.0),
    }
}
