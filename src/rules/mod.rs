//! Rock-Paper-Scissors rules.
//!
//! - `letter_to_choice`: parse a one-letter abbreviation
//! - `what_beats` / `beats`: the cyclic win relation
//! - `sample_choice`: weighted random draw using an explicit RNG

mod engine;

pub use engine::{beats, letter_to_choice, sample_choice, what_beats};
