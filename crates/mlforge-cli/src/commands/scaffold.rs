//! The one thing mlforge does: materialize the project skeleton.
//!
//! Responsibility: resolve the effective project name, translate CLI
//! arguments into a `RunConfig`, assemble the adapters, and hand off to the
//! core materializer. No business logic lives here.

use tracing::{debug, info, instrument};

use mlforge_adapters::LocalFilesystem;
use mlforge_core::{application::Materializer, domain::RunConfig};

use crate::{
    cli::{DEFAULT_PROJECT_NAME, GlobalArgs, ScaffoldArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    reporter::ConsoleReporter,
};

/// Execute the scaffolding run.
#[instrument(skip_all)]
pub fn execute(
    args: ScaffoldArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve the effective project name: flag > config file > built-in.
    let project_name = args
        .project_name
        .or(config.defaults.project_name)
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

    // 2. Validate into a run configuration.
    let run_config = RunConfig::new(project_name, args.dry_run, args.overwrite)
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        project = %run_config.project_name(),
        dry_run = run_config.dry_run(),
        overwrite = run_config.overwrite(),
        "Run configuration resolved"
    );

    output.header(&format!(
        "Materializing skeleton for '{}'...",
        run_config.project_name()
    ))?;
    if run_config.dry_run() {
        output.warning("Dry run: no directories or files will be written")?;
    }

    // 3. Assemble adapters and run.  Per-entry failures are surfaced by the
    //    reporter and never turn into an error here.
    let service = Materializer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleReporter::new(output)),
    );
    service.materialize(&run_config);

    info!(project = %run_config.project_name(), "Scaffold finished");
    Ok(())
}
