//! Seedable random source for choice sampling.
//!
//! There is no process-wide generator. Callers own a `ChoiceRng` and pass it
//! by `&mut` to whatever needs randomness, so a fixed seed gives a fixed
//! sequence of draws.
//!
//! ```
//! use rps_engine::core::ChoiceRng;
//!
//! let mut a = ChoiceRng::new(42);
//! let mut b = ChoiceRng::new(42);
//! assert_eq!(a.next_unit(), b.next_unit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct ChoiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ChoiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded, so `state()` works as usual.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform index in `0..len`.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose an index with weighted probability.
    ///
    /// Weights do not need to sum to 1.0. Negative and NaN weights count as
    /// zero and are never chosen.
    ///
    /// Returns `None` if weights are empty or sum to zero.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let effective = |w: f64| if w > 0.0 { w } else { 0.0 };

        // Scale by the largest weight so the total stays finite.
        let max = weights.iter().copied().map(effective).fold(0.0, f64::max);
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

        let total: f64 = weights.iter().copied().map(scaled).sum();
        let mut threshold = self.next_unit() * total;
        let mut last_positive = None;

        for (i, &weight) in weights.iter().enumerate() {
            let weight = scaled(weight);
            if weight == 0.0 {
                continue;
            }
            if threshold < weight {
                return Some(i);
            }
            threshold -= weight;
            last_positive = Some(i);
        }

        // Rounding can leave a sliver of threshold past the final weight.
        last_positive
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RngState {
        RngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// ChaCha8's word position makes capture and restore O(1) regardless of how
/// many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
