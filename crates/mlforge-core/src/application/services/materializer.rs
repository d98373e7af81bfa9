//! Materializer - the application orchestrator.
//!
//! Walks the static manifest once per invocation:
//! 1. Render the entry path with the run's project name
//! 2. Ensure the parent directory exists
//! 3. Resolve template content and write the file per overwrite policy
//!
//! Every decision is surfaced through the `Reporter` port; per-entry
//! filesystem failures are reported and the run continues. The run itself
//! cannot fail - there is no return value beyond the event stream.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, MaterializeEvent, Reporter},
    domain::{MANIFEST, PathSpec, RenderContext, RunConfig},
};

/// Main materializer service.
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl Materializer {
    /// Create a new materializer with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Process every manifest entry, in order.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            dry_run = config.dry_run(),
            overwrite = config.overwrite(),
        )
    )]
    pub fn materialize(&self, config: &RunConfig) {
        info!(entries = MANIFEST.len(), "Materializing project skeleton");

        let context = RenderContext::new(config.project_name());
        for spec in MANIFEST {
            self.process_entry(spec, &context, config);
        }

        info!("Run complete");
    }

    /// Handle one manifest entry: parent directory, then the file itself.
    fn process_entry(&self, spec: &PathSpec, context: &RenderContext, config: &RunConfig) {
        let path = PathBuf::from(context.render(spec.path));
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.ensure_directory(dir, &file_name, config);
        }

        let templated = spec.template.is_some();
        if config.dry_run() {
            self.reporter
                .report(&MaterializeEvent::FilePlanned { path, templated });
            return;
        }

        let content = spec.content(context);
        self.write_entry(path, &content, templated, config);
    }

    fn ensure_directory(&self, dir: &Path, file_name: &str, config: &RunConfig) {
        if config.dry_run() {
            self.reporter.report(&MaterializeEvent::DirPlanned {
                dir: dir.to_path_buf(),
            });
            return;
        }

        match self.filesystem.create_dir_all(dir) {
            Ok(()) => self.reporter.report(&MaterializeEvent::DirCreated {
                dir: dir.to_path_buf(),
                file: file_name.to_string(),
            }),
            Err(e) => self.reporter.report(&MaterializeEvent::DirFailed {
                dir: dir.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    /// Write unconditionally when the file is absent or empty; otherwise only
    /// under `--overwrite`. The Created/Overwritten classification is decided
    /// from the file's existence before the write.
    fn write_entry(&self, path: PathBuf, content: &str, templated: bool, config: &RunConfig) {
        let existed = self.filesystem.exists(&path);
        let is_empty_file = existed && self.filesystem.file_size(&path) == Some(0);

        if existed && !is_empty_file && !config.overwrite() {
            self.reporter
                .report(&MaterializeEvent::FileSkipped { path });
            return;
        }

        match self.filesystem.write_file(&path, content) {
            Ok(()) => {
                let event = if config.overwrite() && existed {
                    MaterializeEvent::FileOverwritten { path, templated }
                } else {
                    MaterializeEvent::FileCreated { path, templated }
                };
                self.reporter.report(&event);
            }
            Err(e) => self.reporter.report(&MaterializeEvent::FileFailed {
                path,
                reason: e.to_string(),
            }),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
