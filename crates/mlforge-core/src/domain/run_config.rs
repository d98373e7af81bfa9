//! Options for a single materializer invocation.

use crate::domain::error::DomainError;

/// Run configuration: project name plus the two behavior flags.
///
/// Constructed once from command-line input and passed to the materializer;
/// nothing is persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    project_name: String,
    dry_run: bool,
    overwrite: bool,
}

impl RunConfig {
    /// Validate and build a run configuration.
    ///
    /// The project name namespaces exactly one directory segment under
    /// `src/`, so it must be non-empty and free of path separators.
    pub fn new(
        project_name: impl Into<String>,
        dry_run: bool,
        overwrite: bool,
    ) -> Result<Self, DomainError> {
        let project_name = project_name.into();

        if project_name.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: project_name,
                reason: "name cannot be empty".into(),
            });
        }
        if project_name.contains('/') || project_name.contains('\\') {
            return Err(DomainError::InvalidProjectName {
                name: project_name,
                reason: "name cannot contain path separators".into(),
            });
        }

        Ok(Self {
            project_name,
            dry_run,
            overwrite,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}
