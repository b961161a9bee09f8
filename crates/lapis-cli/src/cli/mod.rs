//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `lapis` runs the endpoint wizard in the current
/// directory.
#[derive(Debug, Parser)]
#[command(
    name    = "lapis",
    bin_name = "lapis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactive scaffolding for API endpoint modules",
    long_about = "Lapis asks a few questions about a new API endpoint and writes \
                  src/apis/<name>/config.json and src/apis/<name>/index.ts \
                  relative to the current directory.",
    after_help = "EXAMPLES:\n\
        \x20 lapis                      # run the endpoint wizard\n\
        \x20 lapis init                 # write a default configuration file\n\
        \x20 lapis completions bash > /usr/share/bash-completion/completions/lapis",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Auxiliary subcommand; the wizard runs when absent.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// Auxiliary subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a Lapis configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 lapis init                   # default location\n\
            \x20 lapis init --local           # .lapis.toml in CWD\n\
            \x20 lapis --config lapis.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lapis completions bash > ~/.local/share/bash-completion/completions/lapis\n\
            \x20 lapis completions zsh  > ~/.zfunc/_lapis\n\
            \x20 lapis completions fish > ~/.config/fish/completions/lapis.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `lapis init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.lapis.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lapis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
