//! Generation directives and namespaces.

use primgen_core::TemplateModel;
use std::path::{Path, PathBuf};

/// File suffix of template sources.
pub const TEMPLATE_SUFFIX: &str = ".java.ftl";

/// File suffix of generated sources.
pub const OUTPUT_SUFFIX: &str = ".java";

/// A single path component that cannot leave its parent directory.
fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && segment != ".." && !segment.contains(['/', '\\'])
}

/// Lifecycle of a directive during one expansion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveState {
    /// Queued, not yet processed.
    Pending,
    /// Rendered and written to disk.
    Written,
    /// Failed; the rest of the queue was not processed.
    Aborted,
}

/// One instruction: render `template_name` against `model` into `output_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationDirective {
    /// Generated file name, without suffix.
    pub output_name: String,
    /// Model the template renders against.
    pub model: TemplateModel,
    /// Template name, without suffix.
    pub template_name: String,
}

impl GenerationDirective {
    /// Creates a directive.
    #[must_use]
    pub fn new(
        output_name: impl Into<String>,
        model: TemplateModel,
        template_name: impl Into<String>,
    ) -> Self {
        Self {
            output_name: output_name.into(),
            model,
            template_name: template_name.into(),
        }
    }
}

/// Ordered directives sharing one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
    directives: Vec<GenerationDirective>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directives: Vec::new(),
        }
    }

    /// Returns the dotted namespace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the directives in declaration order.
    #[must_use]
    pub fn directives(&self) -> &[GenerationDirective] {
        &self.directives
    }

    /// Appends a directive.
    pub fn generate(
        &mut self,
        output_name: impl Into<String>,
        model: TemplateModel,
        template_name: impl Into<String>,
    ) -> &mut Self {
        self.directives
            .push(GenerationDirective::new(output_name, model, template_name));
        self
    }

    /// Returns the relative directory as a `/`-separated string.
    #[must_use]
    pub fn dir(&self) -> String {
        self.name.replace('.', "/")
    }

    /// Returns the relative directory as a path.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.name.split('.').collect()
    }

    /// Returns the template key of a directive, relative to the template root.
    #[must_use]
    pub fn template_key(&self, directive: &GenerationDirective) -> String {
        format!("{}/{}{}", self.dir(), directive.template_name, TEMPLATE_SUFFIX)
    }

    /// Returns the template file of a directive.
    #[must_use]
    pub fn template_file(&self, template_root: &Path, directive: &GenerationDirective) -> PathBuf {
        template_root
            .join(self.path())
            .join(format!("{}{}", directive.template_name, TEMPLATE_SUFFIX))
    }

    /// Returns true if the generated file of `directive` stays under the
    /// output root.
    #[must_use]
    pub fn contains_output(&self, directive: &GenerationDirective) -> bool {
        self.name.split('.').all(is_plain_segment) && is_plain_segment(&directive.output_name)
    }

    /// Returns the generated file of a directive.
    #[must_use]
    pub fn output_file(&self, output_root: &Path, directive: &GenerationDirective) -> PathBuf {
        output_root
            .join(self.path())
            .join(format!("{}{}", directive.output_name, OUTPUT_SUFFIX))
    }
}
