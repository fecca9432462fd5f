//! Presentation shell.
//!
//! A `Controller` holds one control per option plus a quit control. Front
//! ends register callbacks with `on_choice` and press controls by index or
//! by resolving user input. `run_session` drives it from line input; the
//! `rps` binary wires that to stdin.

mod config;
mod controller;
mod session;

pub use config::ShellConfig;
pub use controller::{Command, Control, Controller, ShellError, ShellEvent};
pub use session::run_session;
