//! Built-in generation plans.
//!
//! Each plan declares, per package, which per-primitive sources to generate
//! from which template. Plans are plain functions of the registry.

mod base;
mod collection;

pub use base::{base, tuple_class_name};
pub use collection::collection_primitive;

use clap::ValueEnum;
use primgen_codegen::GenerateTask;
use primgen_core::Registry;

/// Selects which plans to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Plan {
    /// Comparators, iterators, options, values, functions, tuples, ranges.
    Base,
    /// Primitive collections: seqs, sets, immutable and mutable variants.
    CollectionPrimitive,
    /// Every plan, base first.
    All,
}

impl Plan {
    /// Builds the task of this plan.
    #[must_use]
    pub fn build(self, registry: &Registry) -> GenerateTask {
        match self {
            Self::Base => base(registry),
            Self::CollectionPrimitive => collection_primitive(registry),
            Self::All => {
                let mut task = base(registry);
                task.extend(collection_primitive(registry));
                task
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_base_then_collection() {
        let registry = Registry::new();
        let all = Plan::All.build(&registry);
        let base = Plan::Base.build(&registry);
        let collection = Plan::CollectionPrimitive.build(&registry);

        assert_eq!(
            all.directive_count(),
            base.directive_count() + collection.directive_count()
        );
        assert_eq!(all.namespaces()[0].name(), base.namespaces()[0].name());
    }

    #[test]
    fn test_plans_have_unique_outputs() {
        let registry = Registry::new();
        for plan in [Plan::Base, Plan::CollectionPrimitive, Plan::All] {
            assert!(plan.build(&registry).duplicate_outputs().is_empty());
        }
    }

    #[test]
    fn test_plans_are_deterministic() {
        let registry = Registry::new();
        assert_eq!(Plan::All.build(&registry), Plan::All.build(&registry));
    }
}
