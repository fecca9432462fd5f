//! Weights over the three options.
//!
//! A `Distribution` is indexed by `Choice`, so it always covers every option.
//! Weights are relative and need not sum to 1. They are not validated. When
//! sampling, negative or NaN weights count as zero.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::{Choice, RuleError, OPTIONS, OPTION_COUNT};

/// Relative weights for each option, in encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    weights: [f64; OPTION_COUNT],
}

impl Distribution {
    /// Create a distribution from per-option weights.
    #[must_use]
    pub const fn new(rock: f64, paper: f64, scissors: f64) -> Self {
        Self {
            weights: [rock, paper, scissors],
        }
    }

    /// Equal weight on every option.
    #[must_use]
    pub const fn uniform() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// All weight on a single option.
    #[must_use]
    pub fn only(choice: Choice) -> Self {
        let mut distr = Self::new(0.0, 0.0, 0.0);
        distr[choice] = 1.0;
        distr
    }

    /// Build from `(encoding, weight)` pairs.
    ///
    /// Every key must be a valid encoding and every option must receive a
    /// weight. A key given twice keeps its last weight.
    ///
    /// ```
    /// use rps_engine::core::{Choice, Distribution};
    ///
    /// let distr = Distribution::from_entries([(0, 1.0), (1, 0.0), (2, 3.0)]).unwrap();
    /// assert_eq!(distr[Choice::Scissors], 3.0);
    ///
    /// assert!(Distribution::from_entries([(0, 1.0), (1, 1.0)]).is_err());
    /// ```
    pub fn from_entries(entries: impl IntoIterator<Item = (i64, f64)>) -> Result<Self, RuleError> {
        let mut weights = [None; OPTION_COUNT];
        for (key, weight) in entries {
            let choice = Choice::try_from(key)?;
            weights[choice.index() as usize] = Some(weight);
        }

        let mut distr = Self::new(0.0, 0.0, 0.0);
        for choice in OPTIONS {
            distr[choice] = weights[choice.index() as usize].ok_or(RuleError::MissingWeight(choice))?;
        }
        Ok(distr)
    }

    /// Raw weights in encoding order.
    #[must_use]
    pub fn weights(&self) -> &[f64; OPTION_COUNT] {
        &self.weights
    }

    /// Sum of the effective (non-negative) weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.iter().filter(|w| **w > 0.0).sum()
    }

    /// Probability of drawing `choice`, or `None` if the total is zero.
    ///
    /// Weights are scaled by the largest one first, so huge finite weights
    /// do not overflow the total.
    #[must_use]
    pub fn probability(&self, choice: Choice) -> Option<f64> {
        let effective = |w: f64| if w > 0.0 { w } else { 0.0 };
        let max = self.weights.iter().copied().map(effective).fold(0.0, f64::max);
        if max <= 0.0 {
            return None;
        }
        let scaled = |w: f64| {
            let w = effective(w);
            if max.is_finite() {
                w / max
            } else if w == max {
                1.0
            } else {
                0.0
            }
        };
        let total: f64 = self.weights.iter().copied().map(scaled).sum();
        Some(scaled(self[choice]) / total)
    }

    /// Iterate over `(Choice, weight)` pairs in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (Choice, f64)> + '_ {
        OPTIONS.iter().map(move |&c| (c, self[c]))
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::uniform()
    }
}

impl Index<Choice> for Distribution {
    type Output = f64;

    fn index(&self, choice: Choice) -> &Self::Output {
        &self.weights[choice.index() as usize]
    }
}

impl IndexMut<Choice> for Distribution {
    fn index_mut(&mut self, choice: Choice) -> &mut Self::Output {
        &mut self.weights[choice.index() as usize]
    }
}
