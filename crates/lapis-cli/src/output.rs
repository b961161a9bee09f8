//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;
use crate::error::CliError;

/// Whether a stream gets ANSI colour: not disabled, and attached to a
/// terminal. Shared with the log subscriber.
pub fn stream_uses_color(disabled: bool, term: &Term) -> bool {
    !disabled && term.is_term()
}

/// Manages CLI output based on configuration.
///
/// Owner of the colour decision: `--no-color`, `NO_COLOR` and
/// `output.no_color` turn it off everywhere, and each stream additionally
/// drops colour when it is not a terminal.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    stderr_no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let disabled = args.no_color || config.output.no_color;
        let term = Term::stdout();
        let err_term = Term::stderr();
        Self {
            quiet: args.quiet,
            no_color: !stream_uses_color(disabled, &term),
            stderr_no_color: !stream_uses_color(disabled, &err_term),
            term,
            err_term,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Numbered list, one item per line, indented under the previous line.
    pub fn steps<S: AsRef<str>>(&self, items: &[S]) -> io::Result<()> {
        for (i, item) in items.iter().enumerate() {
            self.print(&format!("  {}. {}", i + 1, item.as_ref()))?;
        }
        Ok(())
    }

    /// Render an error with its suggestions on stderr. Never suppressed.
    pub fn error(&self, err: &CliError, verbose: bool) -> io::Result<()> {
        let msg = if self.stderr_no_color {
            err.format_plain(verbose)
        } else {
            err.format_colored(verbose)
        };
        self.err_term.write_str(&msg)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
