//! Prompter adapters.
//!
//! Both adapters read one answer per line and share the same answer
//! rules:
//!
//! | Question | Blank answer | Accepted answers |
//! |----------|--------------|------------------|
//! | text     | default (or empty) | anything |
//! | choice   | default index | choice text (any case) or 1-based number |
//! | boolean  | default | `y`, `yes`, `true`, `n`, `no`, `false` |
//!
//! Unrecognised choice and boolean answers are reported and asked again.

mod line;
mod scripted;

pub use line::LinePrompter;
pub use scripted::ScriptedPrompter;

/// Resolve a text answer against its default.
pub(crate) fn interpret_text(answer: &str, default: Option<&str>) -> String {
    match default {
        Some(d) if answer.is_empty() => d.to_string(),
        _ => answer.to_string(),
    }
}

/// Resolve a choice answer to an index, or `None` if unrecognised.
pub(crate) fn interpret_choice(answer: &str, choices: &[&str], default: usize) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(default);
    }
    if let Some(i) = choices.iter().position(|c| c.eq_ignore_ascii_case(answer)) {
        return Some(i);
    }
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=choices.len()).contains(n))
        .map(|n| n - 1)
}

/// Resolve a yes/no answer, or `None` if unrecognised.
pub(crate) fn interpret_boolean(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// Prompt line as shown to the user, e.g. `API version (1.0.0): `.
pub(crate) fn format_prompt(prompt: &str, default: Option<&str>) -> String {
    match default {
        Some(d) if !d.is_empty() => format!("{prompt} ({d}): "),
        _ => format!("{prompt}: "),
    }
}

pub(crate) const INVALID_CHOICE: &str = "Please select one of the available options";
pub(crate) const INVALID_BOOLEAN: &str = "Please enter Y or N";
