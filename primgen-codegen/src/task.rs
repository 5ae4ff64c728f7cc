//! The generate task: every namespace of one generation pass.

use crate::directive::Namespace;
use crate::validation::{DuplicateOutput, duplicate_outputs};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Ordered namespaces to expand in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateTask {
    namespaces: Vec<Namespace>,
}

impl GenerateTask {
    /// Creates an empty task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a namespace and fills it through `declare`.
    ///
    /// ```ignore
    /// task.with_namespace("kala.function", |ns| {
    ///     for d in registry.all() {
    ///         let model = TemplateModel::single(d);
    ///         ns.generate(format!("{}Hasher", d.type_name), model, "PrimitiveHasher");
    ///     }
    /// });
    /// ```
    pub fn with_namespace(
        &mut self,
        name: impl Into<String>,
        declare: impl FnOnce(&mut Namespace),
    ) -> &mut Self {
        let mut namespace = Namespace::new(name);
        declare(&mut namespace);
        self.namespaces.push(namespace);
        self
    }

    /// Appends an already built namespace.
    pub fn push(&mut self, namespace: Namespace) {
        self.namespaces.push(namespace);
    }

    /// Appends every namespace of another task.
    pub fn extend(&mut self, other: GenerateTask) {
        self.namespaces.extend(other.namespaces);
    }

    /// Returns the namespaces in declaration order.
    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Returns the number of directives across all namespaces.
    #[must_use]
    pub fn directive_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.directives().len()).sum()
    }

    /// Returns true if no directive is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directive_count() == 0
    }

    /// Returns the template files the task reads.
    #[must_use]
    pub fn input_files(&self, template_root: &Path) -> BTreeSet<PathBuf> {
        self.namespaces
            .iter()
            .flat_map(|ns| {
                ns.directives()
                    .iter()
                    .map(move |d| ns.template_file(template_root, d))
            })
            .collect()
    }

    /// Returns the files the task writes.
    #[must_use]
    pub fn output_files(&self, output_root: &Path) -> BTreeSet<PathBuf> {
        self.namespaces
            .iter()
            .flat_map(|ns| {
                ns.directives()
                    .iter()
                    .map(move |d| ns.output_file(output_root, d))
            })
            .collect()
    }

    /// Returns outputs declared more than once in the same namespace.
    #[must_use]
    pub fn duplicate_outputs(&self) -> Vec<DuplicateOutput> {
        duplicate_outputs(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primgen_core::{Registry, TemplateModel};

    fn sample_task() -> GenerateTask {
        let registry = Registry::standard();
        let mut task = GenerateTask::new();
        task.with_namespace("kala.value.primitive", |ns| {
            for d in registry.all() {
                ns.generate(
                    format!("{}Value", d.type_name),
                    TemplateModel::single(d),
                    "PrimitiveValue",
                );
                ns.generate(
                    format!("{}Var", d.type_name),
                    TemplateModel::single(d),
                    "PrimitiveVar",
                );
            }
        });
        task.with_namespace("kala.internal", |ns| {
            ns.generate(
                "InternalIntArrayBuilder",
                TemplateModel::single(registry.get(primgen_core::PrimitiveKind::Int)),
                "InternalPrimitiveArrayBuilder",
            );
        });
        task
    }

    #[test]
    fn test_directive_count() {
        let task = sample_task();
        assert_eq!(task.namespaces().len(), 2);
        assert_eq!(task.directive_count(), 17);
        assert!(!task.is_empty());
        assert!(GenerateTask::new().is_empty());
    }

    #[test]
    fn test_input_files_are_deduplicated() {
        let inputs = sample_task().input_files(Path::new("tpl"));
        assert_eq!(inputs.len(), 3);
        assert!(inputs.contains(Path::new("tpl/kala/value/primitive/PrimitiveVar.java.ftl")));
    }

    #[test]
    fn test_output_files() {
        let outputs = sample_task().output_files(Path::new("gen"));
        assert_eq!(outputs.len(), 17);
        assert!(outputs.contains(Path::new("gen/kala/value/primitive/CharValue.java")));
        assert!(outputs.contains(Path::new("gen/kala/internal/InternalIntArrayBuilder.java")));
    }

    #[test]
    fn test_extend() {
        let mut task = sample_task();
        task.extend(sample_task());
        assert_eq!(task.namespaces().len(), 4);
        assert_eq!(task.directive_count(), 34);
    }
}
