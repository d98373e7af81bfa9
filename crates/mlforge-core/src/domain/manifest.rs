//! The static skeleton manifest.
//!
//! An ordered list of path descriptors, each carrying optional template
//! content and a marker for the one entry that receives the project name.
//! The manifest and its templates are immutable constants for the process
//! lifetime; the only dynamic piece is the `{{PROJECT_NAME}}` segment in the
//! `src/` package paths, resolved per run by [`RenderContext`].

use crate::domain::context::RenderContext;

/// One manifest entry: a relative path the tool ensures exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSpec {
    /// Relative path; directory segments may contain `{{PROJECT_NAME}}`.
    pub path: &'static str,
    /// Default file content. `None` creates the file empty.
    pub template: Option<&'static str>,
    /// Marks the packaging descriptor whose template carries the single
    /// project-name insertion point.
    pub substitutes_name: bool,
}

impl PathSpec {
    const fn empty(path: &'static str) -> Self {
        Self {
            path,
            template: None,
            substitutes_name: false,
        }
    }

    const fn templated(path: &'static str, template: &'static str) -> Self {
        Self {
            path,
            template: Some(template),
            substitutes_name: false,
        }
    }

    const fn packaging(path: &'static str, template: &'static str) -> Self {
        Self {
            path,
            template: Some(template),
            substitutes_name: true,
        }
    }

    /// Resolve the content to write for this entry.
    ///
    /// Templates are used verbatim except for the packaging descriptor,
    /// which has the project name substituted in. Entries without a
    /// template produce the empty string.
    pub fn content(&self, context: &RenderContext) -> String {
        match self.template {
            Some(template) if self.substitutes_name => context.render(template),
            Some(template) => template.to_string(),
            None => String::new(),
        }
    }
}

// ── Template content ──────────────────────────────────────────────────────────

/// Minimal setuptools descriptor; `{{PROJECT_NAME}}` is substituted per run.
pub const SETUP_PY: &str = "from setuptools import setup, find_packages\n\n\
setup(\n\
    name='{{PROJECT_NAME}}',\n\
    version='0.1',\n\
    packages=find_packages(),\n\
    install_requires=[],\n\
)\n";

pub const REQUIREMENTS_TXT: &str = "# Add your project dependencies here\n";

pub const CONFIG_YAML: &str = "# YAML configuration for your project\n";

pub const DVC_YAML: &str = "# DVC configuration file\n";

pub const PARAMS_YAML: &str = "# Parameters for the project\n";

// ── The manifest ──────────────────────────────────────────────────────────────

/// The fixed skeleton, in processing order.
///
/// Order defines creation order but carries no further meaning: each entry's
/// parent directory is derived from the entry itself, never from a separate
/// entry.
pub const MANIFEST: &[PathSpec] = &[
    PathSpec::empty(".github/workflows/.gitkeep"),
    PathSpec::empty("src/{{PROJECT_NAME}}/__init__.py"),
    PathSpec::empty("src/{{PROJECT_NAME}}/components/__init__.py"),
    PathSpec::empty("src/{{PROJECT_NAME}}/utils/__init__.py"),
    PathSpec::empty("src/{{PROJECT_NAME}}/config/__init__.py"),
    PathSpec::empty("src/{{PROJECT_NAME}}/config/configuration.py"),
    PathSpec::empty("src/{{PROJECT_NAME}}/pipeline/__init__.py"),
    PathSpec::empty("src/{{PROJECT_NAME}}/entity/__init__.py"),
    PathSpec::empty("src/{{PROJECT_NAME}}/constants/__init__.py"),
    PathSpec::templated("config/config.yaml", CONFIG_YAML),
    PathSpec::templated("dvc.yaml", DVC_YAML),
    PathSpec::templated("params.yaml", PARAMS_YAML),
    PathSpec::templated("requirements.txt", REQUIREMENTS_TXT),
    PathSpec::packaging("setup.py", SETUP_PY),
    PathSpec::empty("research/trials.ipynb"),
    PathSpec::empty("templates/index.html"),
];
