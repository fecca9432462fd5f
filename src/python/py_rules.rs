//! Rule engine bindings for Python.
//!
//! Options cross the boundary as plain integers (0, 1, 2) and distributions
//! as `dict[int, float]`.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Choice, ChoiceRng, Distribution, RuleError};
use crate::rules;

fn to_py_err(err: RuleError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn choice_from(index: i64) -> PyResult<Choice> {
    Choice::try_from(index).map_err(to_py_err)
}

/// Python wrapper for ChoiceRng.
#[pyclass(name = "Rng")]
#[derive(Clone, Debug)]
pub struct PyChoiceRng(pub ChoiceRng);

#[pymethods]
impl PyChoiceRng {
    /// Create a generator; omit `seed` to seed from OS entropy.
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        Self(seed.map_or_else(ChoiceRng::from_entropy, ChoiceRng::new))
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    fn __repr__(&self) -> String {
        format!("Rng(seed={})", self.0.seed())
    }
}

/// Return the option integer for a letter (case-insensitive).
#[pyfunction]
pub fn letter_to_option(letter: &str) -> PyResult<u8> {
    let mut chars = letter.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(PyValueError::new_err(format!(
                "expected a single letter, got {letter:?}"
            )))
        }
    };
    rules::letter_to_choice(c).map(Choice::index).map_err(to_py_err)
}

/// Return the option that beats the given option.
#[pyfunction]
pub fn what_beats(choice: i64) -> PyResult<u8> {
    Ok(rules::what_beats(choice_from(choice)?).index())
}

/// Return whether `choice_1` beats `choice_2`.
#[pyfunction]
pub fn beats(choice_1: i64, choice_2: i64) -> PyResult<bool> {
    Ok(rules::beats(choice_from(choice_1)?, choice_from(choice_2)?))
}

/// Draw an option from a `{option: weight}` mapping.
#[pyfunction]
#[pyo3(signature = (distr, rng=None))]
pub fn random_choice(distr: HashMap<i64, f64>, rng: Option<PyRefMut<'_, PyChoiceRng>>) -> PyResult<u8> {
    let distribution = Distribution::from_entries(distr).map_err(to_py_err)?;
    let choice = match rng {
        Some(mut rng) => rules::sample_choice(&distribution, &mut rng.0),
        None => rules::sample_choice(&distribution, &mut ChoiceRng::from_entropy()),
    };
    Ok(choice.index())
}
