//! Shell presentation settings.

use serde::{Deserialize, Serialize};

/// Labels and prompt text for the shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Title shown once on startup.
    pub title: String,

    /// Prompt printed before each input line.
    pub prompt: String,

    /// Label of the control that ends the shell.
    pub quit_label: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Rock - Paper - Scissors".to_string(),
            prompt: "> ".to_string(),
            quit_label: "QUIT".to_string(),
        }
    }
}

impl ShellConfig {
    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the quit control's label.
    #[must_use]
    pub fn with_quit_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        assert!(!label.trim().is_empty(), "Quit label must not be blank");
        self.quit_label = label;
        self
    }
}
