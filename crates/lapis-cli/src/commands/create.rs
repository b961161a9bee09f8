//! The endpoint wizard, run when `lapis` is invoked without a subcommand.
//!
//! Responsibility: pick a prompter, run the core collector and endpoint
//! service, and display results. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use lapis_adapters::{LinePrompter, LocalFilesystem};
use lapis_core::{
    application::{
        APIS_DIR, CollectorDefaults, EndpointService, MetadataCollector, ScaffoldReport,
        ports::Prompter,
    },
    domain::SOURCE_STUB_FILE,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the wizard against the current directory.
///
/// Dispatch sequence:
/// 1. Resolve collector defaults from configuration
/// 2. Collect metadata through the terminal or piped stdin
/// 3. Write `src/apis/<name>/` via `EndpointService`
/// 4. Print location and next steps
#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let defaults = config.collector_defaults()?;
    let prompter = select_prompter();
    let service = EndpointService::new(Box::new(LocalFilesystem::new()));

    run(prompter.as_ref(), &service, defaults, Path::new(APIS_DIR), output)?;
    Ok(())
}

/// Collect, scaffold, report. Split from [`execute`] so tests can swap the
/// prompter, filesystem and base directory.
pub fn run(
    prompter: &dyn Prompter,
    service: &EndpointService,
    defaults: CollectorDefaults,
    base_dir: &Path,
    output: &OutputManager,
) -> CliResult<ScaffoldReport> {
    output.header("Lapis Wizard")?;

    let metadata = MetadataCollector::new(prompter, defaults)
        .collect()
        .map_err(CliError::from_core)?;

    info!(endpoint = %metadata, "Scaffold started");
    let report = service
        .scaffold(&metadata, base_dir)
        .map_err(CliError::from_core)?;
    info!(endpoint = %report.name, files = report.files.len(), "Scaffold completed");

    print_report(&report, output)?;
    Ok(report)
}

fn select_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Box::new(crate::prompt::TerminalPrompter::new());
    }
    Box::new(LinePrompter::stdio())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn print_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    if report.dir_existed {
        out.warning(&format!(
            "{} already existed; its files were overwritten",
            report.endpoint_dir.display()
        ))?;
    }
    out.success(&format!("API '{}' created successfully!", report.name))?;
    out.print(&format!("  Location: {}", report.endpoint_dir.display()))?;

    if !out.is_quiet() {
        out.print("")?;
        out.print("Next steps:")?;
        out.steps(&next_steps(&report.name))?;
    }
    Ok(())
}

fn next_steps(name: &str) -> [String; 3] {
    [
        format!("Define your parameter and response types in {name}/{SOURCE_STUB_FILE}"),
        "Implement your API logic in the handler function".into(),
        "Add parameter validation in the validate function".into(),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
