//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults.  No business logic lives here.

use clap::{Args, Parser};

pub mod global;
pub use global::GlobalArgs;

/// Built-in default project name, used when neither the `-p` flag nor the
/// configuration file provides one.
pub const DEFAULT_PROJECT_NAME: &str = "cnnClassifier";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// A single flat command: there is exactly one thing mlforge does, so there
/// are no subcommands — running the binary runs the materializer.
#[derive(Debug, Parser)]
#[command(
    name    = "mlforge",
    bin_name = "mlforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Standardized ML project skeletons",
    long_about = "Mlforge materializes a standardized directory and file \
                  skeleton for machine learning projects in the current \
                  working directory.",
    after_help = "EXAMPLES:\n\
        \x20 mlforge -p cnnClassifier\n\
        \x20 mlforge -p textSummarizer --dry_run\n\
        \x20 mlforge -p demo --overwrite -v",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Scaffolding options.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

// ── Scaffolding options ───────────────────────────────────────────────────────

/// Options controlling what gets materialized.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Project/package name; namespaces the `src/` package directory and is
    /// substituted into the packaging descriptor.
    #[arg(
        short = 'p',
        long = "project_name",
        value_name = "NAME",
        help = "Name of the project [default: cnnClassifier]"
    )]
    pub project_name: Option<String>,

    /// Report intended actions without touching the filesystem.
    #[arg(
        long = "dry_run",
        help = "Simulate the file creation without making changes"
    )]
    pub dry_run: bool,

    /// Truncate and rewrite existing non-empty files.
    #[arg(
        long = "overwrite",
        help = "Overwrite existing files even if not empty"
    )]
    pub overwrite: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
