//! Core types: the option encoding, weight tables, RNG, and errors.
//!
//! Everything here is plain data. The rules that operate on it live in
//! `crate::rules`.

pub mod choice;
pub mod distribution;
pub mod error;
pub mod rng;

pub use choice::{Choice, OPTIONS, OPTION_COUNT, RPS};
pub use distribution::Distribution;
pub use error::RuleError;
pub use rng::{ChoiceRng, RngState};
