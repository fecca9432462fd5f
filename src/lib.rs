//! # rps-engine
//!
//! Rock-Paper-Scissors rules with a thin presentation shell.
//!
//! ## Encoding
//!
//! The three options are encoded as `Rock = 0`, `Paper = 1`, `Scissors = 2`.
//! Each option beats the one before it modulo 3, so `what_beats(c)` is
//! `(c + 1) mod 3` and `beats(a, b)` is `(a - b) mod 3 == 1`.
//!
//! ## Randomness
//!
//! There is no global generator. Sampling takes an explicit `&mut ChoiceRng`,
//! which makes seeded runs reproducible.
//!
//! ```
//! use rps_engine::{sample_choice, Choice, ChoiceRng, Distribution};
//!
//! let mut rng = ChoiceRng::new(42);
//! let choice = sample_choice(&Distribution::only(Choice::Rock), &mut rng);
//! assert_eq!(choice, Choice::Rock);
//! ```
//!
//! ## Modules
//!
//! - `core`: option encoding, distributions, RNG, errors
//! - `rules`: letter parsing, win relation, weighted sampling
//! - `shell`: controller for the terminal front end
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod shell;

#[cfg(feature = "python")]
pub mod python;

pub use crate::core::{
    Choice, OPTIONS, OPTION_COUNT, RPS,
    Distribution,
    ChoiceRng, RngState,
    RuleError,
};

pub use crate::rules::{beats, letter_to_choice, sample_choice, what_beats};

pub use crate::shell::{run_session, Command, Control, Controller, ShellConfig, ShellError, ShellEvent};
