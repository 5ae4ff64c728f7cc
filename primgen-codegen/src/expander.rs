//! The template expander.
//!
//! Expansion is a single synchronous pass: namespaces in declaration order,
//! directives in declaration order, first error aborts. Files written before
//! the failure stay on disk.

use crate::config::ExpanderConfig;
use crate::context::model_value;
use crate::directive::{DirectiveState, GenerationDirective, Namespace};
use crate::error::CodegenError;
use crate::task::GenerateTask;
use minijinja::{Environment, UndefinedBehavior};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of one directive in a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Dotted namespace name.
    pub namespace: String,
    /// Generated file path.
    pub output: PathBuf,
    /// Final state.
    pub state: DirectiveState,
}

/// Per-directive states of an expansion pass, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    entries: Vec<ReportEntry>,
}

impl ExpansionReport {
    /// Creates a report with every directive of `task` pending.
    #[must_use]
    pub fn pending(task: &GenerateTask, output_root: &Path) -> Self {
        let entries = task
            .namespaces()
            .iter()
            .flat_map(|ns| {
                ns.directives().iter().map(move |d| ReportEntry {
                    namespace: ns.name().to_string(),
                    output: ns.output_file(output_root, d),
                    state: DirectiveState::Pending,
                })
            })
            .collect();
        Self { entries }
    }

    /// Returns all entries.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Returns the files written, in order.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|e| e.state == DirectiveState::Written)
            .map(|e| e.output.as_path())
    }

    /// Counts entries in a state.
    #[must_use]
    pub fn count(&self, state: DirectiveState) -> usize {
        self.entries.iter().filter(|e| e.state == state).count()
    }

    /// Returns true if every directive was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.state == DirectiveState::Written)
    }

    fn mark(&mut self, index: usize, state: DirectiveState) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.state = state;
        }
    }
}

/// Renders directives and writes the generated-source tree.
pub struct TemplateExpander {
    config: ExpanderConfig,
    env: Environment<'static>,
}

impl TemplateExpander {
    /// Creates an expander loading templates from the configured root.
    #[must_use]
    pub fn new(config: ExpanderConfig) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(config.trims_blocks());
        env.set_lstrip_blocks(config.lstrips_blocks());
        env.set_keep_trailing_newline(config.keeps_trailing_newline());

        let root = config.template_root().to_path_buf();
        env.set_loader(move |name| load_template(&root, name));

        Self { config, env }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ExpanderConfig {
        &self.config
    }

    /// Expands every directive of a task.
    ///
    /// # Errors
    /// Returns `CodegenError` on the first failure; remaining directives are
    /// not processed.
    pub fn expand(&mut self, task: &GenerateTask) -> Result<ExpansionReport, CodegenError> {
        let mut report = ExpansionReport::pending(task, self.config.output_root());
        self.expand_into(task, &mut report)?;
        Ok(report)
    }

    /// Expands every directive of a task, recording progress in `report`.
    ///
    /// On failure the failing entry is marked aborted and later entries stay
    /// pending. Templates are reloaded from disk on every pass.
    ///
    /// # Errors
    /// Returns `CodegenError` on the first failure.
    pub fn expand_into(
        &mut self,
        task: &GenerateTask,
        report: &mut ExpansionReport,
    ) -> Result<(), CodegenError> {
        self.env.clear_templates();

        for root in [self.config.template_root(), self.config.output_root()] {
            fs::create_dir_all(root).map_err(|e| CodegenError::create_dir(root, e))?;
        }

        for dup in task.duplicate_outputs() {
            tracing::warn!(
                "Output '{}' declared {} times in namespace '{}', last declaration wins",
                dup.output_name,
                dup.occurrences,
                dup.namespace
            );
        }

        tracing::info!(
            "Expanding {} directives in {} namespaces into {}",
            task.directive_count(),
            task.namespaces().len(),
            self.config.output_root().display()
        );

        let mut index = 0;
        for ns in task.namespaces() {
            for directive in ns.directives() {
                match self.expand_directive(ns, directive) {
                    Ok(path) => {
                        tracing::debug!("Wrote {}", path.display());
                        report.mark(index, DirectiveState::Written);
                    }
                    Err(e) => {
                        tracing::error!(
                            "Aborting expansion at '{}' in namespace '{}': {}",
                            directive.output_name,
                            ns.name(),
                            e
                        );
                        report.mark(index, DirectiveState::Aborted);
                        return Err(e);
                    }
                }
                index += 1;
            }
        }

        tracing::info!("Expansion complete, {} files written", index);
        Ok(())
    }

    /// Renders one directive without writing it.
    ///
    /// # Errors
    /// Returns `TemplateNotFound`, `TemplateSyntax` or `Render`.
    pub fn render(
        &self,
        ns: &Namespace,
        directive: &GenerationDirective,
    ) -> Result<String, CodegenError> {
        let template_file = ns.template_file(self.config.template_root(), directive);
        if !template_file.is_file() {
            return Err(CodegenError::TemplateNotFound {
                path: template_file,
            });
        }

        let key = ns.template_key(directive);
        let template = self.env.get_template(&key).map_err(|e| match e.kind() {
            minijinja::ErrorKind::TemplateNotFound => CodegenError::TemplateNotFound {
                path: template_file.clone(),
            },
            _ => CodegenError::from_engine(&key, &e),
        })?;

        template
            .render(model_value(&directive.model))
            .map_err(|e| CodegenError::from_engine(&key, &e))
    }

    fn expand_directive(
        &self,
        ns: &Namespace,
        directive: &GenerationDirective,
    ) -> Result<PathBuf, CodegenError> {
        if !ns.contains_output(directive) {
            return Err(CodegenError::InvalidOutputName {
                namespace: ns.name().to_string(),
                output_name: directive.output_name.clone(),
            });
        }

        let rendered = self.render(ns, directive)?;
        let output = ns.output_file(self.config.output_root(), directive);

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| CodegenError::create_dir(parent, e))?;
        }
        fs::write(&output, rendered).map_err(|e| CodegenError::write(&output, e))?;

        Ok(output)
    }
}

/// Reads `name` relative to `root`. Names escaping the root resolve to
/// nothing.
fn load_template(root: &Path, name: &str) -> Result<Option<String>, minijinja::Error> {
    if name.split('/').any(|segment| segment == "..") {
        return Ok(None);
    }

    let path = root.join(name);
    match fs::read_to_string(&path) {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            format!("could not read template {}", path.display()),
        )
        .with_source(e)),
    }
}
