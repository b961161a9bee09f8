//! Scripted prompter for tests and non-interactive callers.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use lapis_core::{
    application::{ApplicationError, ports::Prompter},
    error::LapisResult,
};

use super::{INVALID_BOOLEAN, INVALID_CHOICE, interpret_boolean, interpret_choice, interpret_text};

/// Plays back canned answers in order and records what was asked.
///
/// Clones share state. Running out of answers behaves like closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<Script>>,
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    reports: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(Mutex::new(Script {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Script::default()
            })),
        }
    }

    /// Every prompt shown so far, re-asks included.
    pub fn prompts(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|s| s.prompts.clone())
            .unwrap_or_default()
    }

    /// Every message passed to [`Prompter::report`].
    pub fn reports(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|s| s.reports.clone())
            .unwrap_or_default()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.lock().map(|s| s.answers.len()).unwrap_or(0)
    }

    fn next(&self, prompt: &str) -> LapisResult<String> {
        let mut script = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        script.prompts.push(prompt.to_string());
        script
            .answers
            .pop_front()
            .ok_or_else(|| ApplicationError::InputClosed.into())
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&self, prompt: &str, default: Option<&str>) -> LapisResult<String> {
        let answer = self.next(prompt)?;
        Ok(interpret_text(&answer, default))
    }

    fn ask_choice(&self, prompt: &str, choices: &[&str], default: usize) -> LapisResult<usize> {
        loop {
            let answer = self.next(prompt)?;
            match interpret_choice(&answer, choices, default) {
                Some(index) => return Ok(index),
                None => self.report(INVALID_CHOICE)?,
            }
        }
    }

    fn ask_boolean(&self, prompt: &str, default: bool) -> LapisResult<bool> {
        loop {
            let answer = self.next(prompt)?;
            match interpret_boolean(&answer, default) {
                Some(value) => return Ok(value),
                None => self.report(INVALID_BOOLEAN)?,
            }
        }
    }

    fn report(&self, message: &str) -> LapisResult<()> {
        let mut script = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        script.reports.push(message.to_string());
        Ok(())
    }
}
