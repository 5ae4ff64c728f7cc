//! Task validation utilities.
//!
//! Directives are appended without checks. The only conflict worth reporting
//! before expansion is two directives targeting the same generated file, in
//! which case the later one overwrites the earlier.

use crate::task::GenerateTask;
use std::collections::HashMap;

/// An output declared more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateOutput {
    /// Dotted namespace name.
    pub namespace: String,
    /// Output name without suffix.
    pub output_name: String,
    /// Number of declarations.
    pub occurrences: usize,
}

/// Finds outputs declared more than once, in first-declaration order.
#[must_use]
pub fn duplicate_outputs(task: &GenerateTask) -> Vec<DuplicateOutput> {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    let mut order = Vec::new();

    for ns in task.namespaces() {
        for directive in ns.directives() {
            let key = (ns.name(), directive.output_name.as_str());
            let count = counts.entry(key).or_insert(0);
            if *count == 0 {
                order.push(key);
            }
            *count += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|key| {
            let occurrences = counts[&key];
            (occurrences > 1).then(|| DuplicateOutput {
                namespace: key.0.to_string(),
                output_name: key.1.to_string(),
                occurrences,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use primgen_core::{PrimitiveKind, Registry, TemplateModel};

    #[test]
    fn test_no_duplicates() {
        let registry = Registry::standard();
        let mut task = GenerateTask::new();
        task.with_namespace("kala.function", |ns| {
            for d in registry.all() {
                ns.generate(
                    format!("{}Hasher", d.type_name),
                    TemplateModel::single(d),
                    "PrimitiveHasher",
                );
            }
        });
        assert!(duplicate_outputs(&task).is_empty());
    }

    #[test]
    fn test_duplicate_within_namespace() {
        let int = TemplateModel::single(Registry::standard().get(PrimitiveKind::Int));
        let mut task = GenerateTask::new();
        task.with_namespace("kala.function", |ns| {
            ns.generate("IntHasher", int.clone(), "PrimitiveHasher")
                .generate("IntHasher", int.clone(), "OtherHasher")
                .generate("IntHasher", int.clone(), "ThirdHasher");
        });

        let dups = duplicate_outputs(&task);
        assert_eq!(
            dups,
            vec![DuplicateOutput {
                namespace: "kala.function".to_string(),
                output_name: "IntHasher".to_string(),
                occurrences: 3,
            }]
        );
    }

    #[test]
    fn test_same_name_across_namespaces_is_fine() {
        let int = TemplateModel::single(Registry::standard().get(PrimitiveKind::Int));
        let mut task = GenerateTask::new();
        task.with_namespace("kala.a", |ns| {
            ns.generate("IntThing", int.clone(), "Thing");
        });
        task.with_namespace("kala.b", |ns| {
            ns.generate("IntThing", int.clone(), "Thing");
        });
        assert!(duplicate_outputs(&task).is_empty());
    }

    #[test]
    fn test_repeated_namespace_declaration_is_checked() {
        let int = TemplateModel::single(Registry::standard().get(PrimitiveKind::Int));
        let mut task = GenerateTask::new();
        task.with_namespace("kala.a", |ns| {
            ns.generate("IntThing", int.clone(), "Thing");
        });
        task.with_namespace("kala.a", |ns| {
            ns.generate("IntThing", int.clone(), "Thing");
        });
        assert_eq!(duplicate_outputs(&task).len(), 1);
    }
}
