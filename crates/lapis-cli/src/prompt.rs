//! Terminal prompter built on `dialoguer` widgets.
//!
//! Only used when stdin is a terminal; piped input goes through
//! [`lapis_adapters::LinePrompter`].

use console::Term;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use lapis_core::{
    application::{ApplicationError, ports::Prompter},
    error::LapisResult,
};

/// Interactive prompter with arrow-key selection and inline defaults.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask_text(&self, prompt: &str, default: Option<&str>) -> LapisResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(d) = default.filter(|d| !d.is_empty()) {
            input = input.default(d.to_string());
        }
        input.interact_text().map_err(prompt_failed)
    }

    fn ask_choice(&self, prompt: &str, choices: &[&str], default: usize) -> LapisResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .default(default)
            .interact()
            .map_err(prompt_failed)
    }

    fn ask_boolean(&self, prompt: &str, default: bool) -> LapisResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_failed)
    }

    fn report(&self, message: &str) -> LapisResult<()> {
        Term::stderr()
            .write_line(message)
            .map_err(|e| prompt_failed(e.into()))
    }
}

fn prompt_failed(e: dialoguer::Error) -> lapis_core::error::LapisError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}
