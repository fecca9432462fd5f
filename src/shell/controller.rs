//! Controller wiring controls to callbacks.

use crate::core::{Choice, RuleError, OPTIONS};
use crate::rules::letter_to_choice;

use super::ShellConfig;

/// What a control does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Register a fixed choice.
    Choose(Choice),
    /// End the shell.
    Quit,
}

/// A labelled control bound to a fixed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub command: Command,
}

/// Result of pressing a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    Chose(Choice),
    Quit,
}

/// Shell errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("unrecognized input: {0:?}")]
    UnknownInput(String),

    #[error("no control at index {0}")]
    NoSuchControl(usize),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

type ChoiceCallback = Box<dyn FnMut(Choice)>;

/// Owns the controls and the callbacks registered against them.
///
/// Controls are one per option in encoding order, then quit.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use rps_engine::core::Choice;
/// use rps_engine::shell::{Controller, ShellConfig, ShellEvent};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut controller = Controller::new(ShellConfig::default());
/// let sink = Rc::clone(&seen);
/// controller.on_choice(move |c| sink.borrow_mut().push(c));
///
/// assert_eq!(controller.press(1).unwrap(), ShellEvent::Chose(Choice::Paper));
/// assert_eq!(*seen.borrow(), vec![Choice::Paper]);
/// ```
pub struct Controller {
    config: ShellConfig,
    controls: Vec<Control>,
    callbacks: Vec<ChoiceCallback>,
}

impl Controller {
    /// Create the controls from the option table.
    pub fn new(config: ShellConfig) -> Self {
        let mut controls: Vec<Control> = OPTIONS
            .iter()
            .map(|&choice| Control {
                label: choice.name().to_string(),
                command: Command::Choose(choice),
            })
            .collect();
        controls.push(Control {
            label: config.quit_label.clone(),
            command: Command::Quit,
        });

        Self {
            config,
            controls,
            callbacks: Vec::new(),
        }
    }

    /// Shell settings.
    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// All controls in display order.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Register a callback invoked with the choice of every pressed option.
    pub fn on_choice(&mut self, callback: impl FnMut(Choice) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Press the control at `index`.
    pub fn press(&mut self, index: usize) -> Result<ShellEvent, ShellError> {
        let control = self
            .controls
            .get(index)
            .ok_or(ShellError::NoSuchControl(index))?;
        tracing::debug!(label = %control.label, "control pressed");

        match control.command {
            Command::Choose(choice) => {
                for callback in &mut self.callbacks {
                    callback(choice);
                }
                Ok(ShellEvent::Chose(choice))
            }
            Command::Quit => Ok(ShellEvent::Quit),
        }
    }

    /// Map a line of input to a control index.
    ///
    /// Accepts the quit label, `q`/`quit`, a full option name, or a single
    /// option letter. Matching ignores case and surrounding whitespace.
    pub fn resolve(&self, input: &str) -> Result<usize, ShellError> {
        let input = input.trim();

        if let Some(index) = self
            .controls
            .iter()
            .position(|c| c.label.eq_ignore_ascii_case(input))
        {
            return Ok(index);
        }
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(self.quit_index());
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                let choice = letter_to_choice(letter)?;
                Ok(self.choice_index(choice))
            }
            _ => Err(ShellError::UnknownInput(input.to_string())),
        }
    }

    /// Resolve `input` and press the matching control.
    pub fn handle(&mut self, input: &str) -> Result<ShellEvent, ShellError> {
        let index = self.resolve(input)?;
        self.press(index)
    }

    /// Line printed for a registered choice.
    #[must_use]
    pub fn show_choice(choice: Choice) -> String {
        format!("You chose {}", choice.name())
    }

    fn choice_index(&self, choice: Choice) -> usize {
        self.controls
            .iter()
            .position(|c| c.command == Command::Choose(choice))
            .unwrap_or(choice.index() as usize)
    }

    fn quit_index(&self) -> usize {
        self.controls.len() - 1
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field("controls", &self.controls)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
