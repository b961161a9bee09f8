//! Line-oriented prompter over any reader/writer pair.
//!
//! Used when stdin is not a terminal (piped answers) and in builds without
//! the interactive widgets.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use lapis_core::{
    application::{ApplicationError, ports::Prompter},
    error::LapisResult,
};
use tracing::trace;

use super::{
    INVALID_BOOLEAN, INVALID_CHOICE, format_prompt, interpret_boolean, interpret_choice,
    interpret_text,
};

/// Reads answers line by line from `R`, writes prompts to `W`.
pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl LinePrompter<io::BufReader<io::Stdin>, io::Stdout> {
    /// Prompter on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Take back the reader and writer.
    pub fn into_inner(self) -> LapisResult<(R, W)> {
        self.io
            .into_inner()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    /// Show `prompt` and read one line, without its line ending.
    fn ask_line(&self, prompt: &str) -> LapisResult<String> {
        let mut guard = self.io.lock().map_err(|_| ApplicationError::StoreLockError)?;
        let (reader, writer) = &mut *guard;

        write!(writer, "{prompt}").map_err(prompt_failed)?;
        writer.flush().map_err(prompt_failed)?;

        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(prompt_failed)?;
        if read == 0 {
            return Err(ApplicationError::InputClosed.into());
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        trace!(prompt, answer = %answer, "Read answer");
        Ok(answer)
    }

    fn say(&self, message: &str) -> LapisResult<()> {
        let mut guard = self.io.lock().map_err(|_| ApplicationError::StoreLockError)?;
        let (_, writer) = &mut *guard;
        writeln!(writer, "{message}").map_err(prompt_failed)?;
        writer.flush().map_err(prompt_failed)?;
        Ok(())
    }
}

impl<R, W> Prompter for LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask_text(&self, prompt: &str, default: Option<&str>) -> LapisResult<String> {
        let answer = self.ask_line(&format_prompt(prompt, default))?;
        Ok(interpret_text(&answer, default))
    }

    fn ask_choice(&self, prompt: &str, choices: &[&str], default: usize) -> LapisResult<usize> {
        let shown = format!(
            "{prompt} [{}] ({}): ",
            choices.join("/"),
            choices.get(default).copied().unwrap_or_default()
        );
        loop {
            let answer = self.ask_line(&shown)?;
            match interpret_choice(&answer, choices, default) {
                Some(index) => return Ok(index),
                None => self.say(INVALID_CHOICE)?,
            }
        }
    }

    fn ask_boolean(&self, prompt: &str, default: bool) -> LapisResult<bool> {
        let shown = format!("{prompt} [y/n] ({}): ", if default { "y" } else { "n" });
        loop {
            let answer = self.ask_line(&shown)?;
            match interpret_boolean(&answer, default) {
                Some(value) => return Ok(value),
                None => self.say(INVALID_BOOLEAN)?,
            }
        }
    }

    fn report(&self, message: &str) -> LapisResult<()> {
        self.say(message)
    }
}

fn prompt_failed(e: io::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
}
