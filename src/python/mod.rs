//! Python bindings for the rule engine.
//!
//! # Quick Start
//!
//! ```python
//! import rps_engine as rps
//!
//! rps.letter_to_option("P")     # 1
//! rps.beats(0, 2)               # True
//!
//! rng = rps.Rng(seed=42)
//! rps.random_choice({0: 1, 1: 1, 2: 1}, rng)
//! ```

use std::collections::BTreeMap;

use pyo3::prelude::*;

mod py_rules;

pub use py_rules::PyChoiceRng;

use crate::core::{OPTIONS, RPS};

/// rps_engine: Rock-Paper-Scissors rules.
#[pymodule]
fn rps_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let options: BTreeMap<u8, &str> = OPTIONS.iter().map(|c| (c.index(), c.name())).collect();
    m.add("OPTIONS", options)?;
    m.add("RPS", RPS)?;

    m.add_class::<PyChoiceRng>()?;

    m.add_function(wrap_pyfunction!(py_rules::letter_to_option, m)?)?;
    m.add_function(wrap_pyfunction!(py_rules::what_beats, m)?)?;
    m.add_function(wrap_pyfunction!(py_rules::beats, m)?)?;
    m.add_function(wrap_pyfunction!(py_rules::random_choice, m)?)?;

    Ok(())
}
