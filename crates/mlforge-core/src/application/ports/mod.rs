//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mlforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mlforge_adapters::filesystem::LocalFilesystem` (production)
/// - `mlforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, truncating any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Size of the file in bytes, or `None` if the path is not a regular
    /// file (or cannot be inspected).
    fn file_size(&self, path: &Path) -> Option<u64>;
}

/// Port for surfacing per-entry run decisions.
///
/// The materializer reports every directory and file decision through this
/// port instead of writing to a global log sink. Implemented by:
/// - `mlforge_cli::ConsoleReporter` (user-facing lines + tracing)
/// - `mlforge_adapters::reporter::RecordingReporter` (testing)
pub trait Reporter: Send + Sync {
    fn report(&self, event: &MaterializeEvent);
}

/// One per-entry decision taken during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeEvent {
    /// Dry run: the directory that would be created.
    DirPlanned { dir: PathBuf },
    /// Directory ensured (created or already present).
    DirCreated { dir: PathBuf, file: String },
    /// Directory creation failed; the run continues.
    DirFailed { dir: PathBuf, reason: String },
    /// Dry run: the file that would be created or overwritten.
    FilePlanned { path: PathBuf, templated: bool },
    /// File written where none existed (or only an empty one did).
    FileCreated { path: PathBuf, templated: bool },
    /// Existing file truncated and rewritten under `--overwrite`.
    FileOverwritten { path: PathBuf, templated: bool },
    /// File left untouched: it exists and is non-empty.
    FileSkipped { path: PathBuf },
    /// File write failed; the run continues.
    FileFailed { path: PathBuf, reason: String },
}

impl MaterializeEvent {
    /// `true` for the failure variants.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::DirFailed { .. } | Self::FileFailed { .. })
    }

    /// `true` for the dry-run variants.
    pub fn is_planned(&self) -> bool {
        matches!(self, Self::DirPlanned { .. } | Self::FilePlanned { .. })
    }
}
