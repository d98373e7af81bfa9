//! Console reporter: turns materializer events into user-facing lines.
//!
//! The wording matches the run log users grep for; every line is mirrored to
//! tracing at the matching severity.

use tracing::{error, info};

use mlforge_core::application::ports::{MaterializeEvent, Reporter};

use crate::output::OutputManager;

/// Reporter backed by the CLI's [`OutputManager`].
pub struct ConsoleReporter {
    output: OutputManager,
}

impl ConsoleReporter {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: &MaterializeEvent) {
        // Console write failures mid-run are not actionable; drop them.
        let _ = match event {
            MaterializeEvent::DirPlanned { dir } => {
                info!(dir = %dir.display(), "dry run: directory");
                self.output.info(&format!(
                    "[Dry Run] Would create directory: {}",
                    dir.display()
                ))
            }
            MaterializeEvent::DirCreated { dir, file } => {
                info!(dir = %dir.display(), "directory ensured");
                self.output.print(&format!(
                    "Created directory: {} for file: {}",
                    dir.display(),
                    file
                ))
            }
            MaterializeEvent::DirFailed { dir, reason } => {
                error!(dir = %dir.display(), %reason, "directory creation failed");
                self.output.error(&format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    reason
                ))
            }
            MaterializeEvent::FilePlanned { path, templated } => {
                info!(path = %path.display(), templated, "dry run: file");
                let content = if *templated {
                    "provided template"
                } else {
                    "empty file"
                };
                self.output.info(&format!(
                    "[Dry Run] Would create/overwrite file: {} with content: {}",
                    path.display(),
                    content
                ))
            }
            MaterializeEvent::FileCreated { path, templated } => {
                info!(path = %path.display(), templated, "file created");
                self.output.success(&format!(
                    "Created file: {}{}",
                    path.display(),
                    template_suffix(*templated)
                ))
            }
            MaterializeEvent::FileOverwritten { path, templated } => {
                info!(path = %path.display(), templated, "file overwritten");
                self.output.success(&format!(
                    "Overwritten file: {}{}",
                    path.display(),
                    template_suffix(*templated)
                ))
            }
            MaterializeEvent::FileSkipped { path } => {
                info!(path = %path.display(), "file skipped");
                self.output.print(&format!(
                    "File already exists and is non-empty: {}",
                    path.display()
                ))
            }
            MaterializeEvent::FileFailed { path, reason } => {
                error!(path = %path.display(), %reason, "file write failed");
                self.output.error(&format!(
                    "Failed to write file {}: {}",
                    path.display(),
                    reason
                ))
            }
        };
    }
}

fn template_suffix(templated: bool) -> &'static str {
    if templated { " with template content" } else { "" }
}
