//! Project-name substitution context.
//!
//! The manifest is deliberately not a templating engine: the only variable a
//! path or template content may carry is the project name. [`RenderContext`]
//! performs that one substitution.

/// The single placeholder recognised in manifest paths and template content.
pub const PROJECT_NAME_VAR: &str = "{{PROJECT_NAME}}";

/// Substitution context for one materializer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    /// The project name as supplied by the user.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Replace every occurrence of [`PROJECT_NAME_VAR`] in `input`.
    ///
    /// Input without the placeholder passes through unchanged.
    pub fn render(&self, input: &str) -> String {
        input.replace(PROJECT_NAME_VAR, &self.project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_project_name_in_paths() {
        let ctx = RenderContext::new("demo");
        assert_eq!(
            ctx.render("src/{{PROJECT_NAME}}/__init__.py"),
            "src/demo/__init__.py"
        );
    }

    #[test]
    fn substitutes_project_name_in_content() {
        let ctx = RenderContext::new("cnnClassifier");
        assert_eq!(
            ctx.render("name='{{PROJECT_NAME}}',"),
            "name='cnnClassifier',"
        );
    }

    #[test]
    fn input_without_placeholder_is_unchanged() {
        let ctx = RenderContext::new("demo");
        assert_eq!(ctx.render("dvc.yaml"), "dvc.yaml");
    }

    #[test]
    fn multiple_occurrences_all_replaced() {
        let ctx = RenderContext::new("x");
        assert_eq!(
            ctx.render("{{PROJECT_NAME}}/{{PROJECT_NAME}}"),
            "x/x"
        );
    }
}
