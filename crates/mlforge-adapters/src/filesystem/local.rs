//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use mlforge_core::{application::ports::Filesystem, error::ForgeResult};

/// Production filesystem implementation using `std::fs`.
///
/// Manifest paths are relative; they are resolved against `root`, which
/// defaults to the current working directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Adapter rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }

    /// Adapter rooted at an explicit base directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let full = self.resolve(path);
        debug!(path = %full.display(), "create_dir_all");
        std::fs::create_dir_all(&full).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let full = self.resolve(path);
        debug!(path = %full.display(), bytes = content.len(), "write_file");
        std::fs::write(&full, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn file_size(&self, path: &Path) -> Option<u64> {
        let metadata = std::fs::metadata(self.resolve(path)).ok()?;
        metadata.is_file().then(|| metadata.len())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mlforge_core::error::ForgeError {
    use mlforge_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
