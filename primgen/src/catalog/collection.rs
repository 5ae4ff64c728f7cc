//! Plan for the primitive collections.

use primgen_codegen::GenerateTask;
use primgen_core::{PrimitiveDescriptor, PrimitiveKind, Registry, TemplateModel};

/// Kinds without a useful total order for tree-backed and sorted types.
fn has_tree_types(d: &PrimitiveDescriptor) -> bool {
    !matches!(d.kind, PrimitiveKind::Boolean | PrimitiveKind::Byte)
}

/// Builds the primitive collection plan.
#[must_use]
pub fn collection_primitive(registry: &Registry) -> GenerateTask {
    let mut task = GenerateTask::new();

    task.with_namespace("kala.collection.primitive", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let templates = [
                (format!("{t}Collection"), "PrimitiveCollection"),
                (format!("{t}CollectionView"), "PrimitiveCollectionView"),
                (format!("{t}CollectionLike"), "PrimitiveCollectionLike"),
                (format!("Abstract{t}Collection"), "AbstractPrimitiveCollection"),
                (format!("Abstract{t}CollectionView"), "AbstractPrimitiveCollectionView"),
                (format!("{t}Seq"), "PrimitiveSeq"),
                (format!("{t}SeqView"), "PrimitiveSeqView"),
                (format!("{t}SeqLike"), "PrimitiveSeqLike"),
                (format!("Indexed{t}SeqLike"), "IndexedPrimitiveSeqLike"),
                (format!("Indexed{t}Seq"), "IndexedPrimitiveSeq"),
                (format!("Abstract{t}Seq"), "AbstractPrimitiveSeq"),
                (format!("Abstract{t}SeqView"), "AbstractPrimitiveSeqView"),
                (format!("{t}SeqIterator"), "PrimitiveSeqIterator"),
                (format!("Abstract{t}SeqIterator"), "AbstractPrimitiveSeqIterator"),
                (format!("{t}ArraySeq"), "PrimitiveArraySeq"),
                (format!("{t}Set"), "PrimitiveSet"),
                (format!("{t}SetView"), "PrimitiveSetView"),
                (format!("{t}SetLike"), "PrimitiveSetLike"),
                (format!("Abstract{t}Set"), "AbstractPrimitiveSet"),
                (format!("Abstract{t}SetView"), "AbstractPrimitiveSetView"),
            ];
            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }
        }
    });

    task.with_namespace("kala.collection.primitive.internal", |ns| {
        for d in registry.all() {
            let output = format!("{}SeqIterators", d.type_name);
            ns.generate(output, TemplateModel::single(d), "PrimitiveSeqIterators");
        }
    });

    task.with_namespace("kala.collection.primitive.internal.tree", |ns| {
        for d in registry.all().iter().filter(|d| has_tree_types(d)) {
            let output = format!("{}RedBlackTree", d.type_name);
            ns.generate(output, TemplateModel::single(d), "PrimitiveRedBlackTree");
        }
    });

    task.with_namespace("kala.collection.primitive.internal.view", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let templates = [
                (format!("{t}CollectionViews"), "PrimitiveCollectionViews"),
                (format!("{t}SeqViews"), "PrimitiveSeqViews"),
                (format!("{t}SetViews"), "PrimitiveSetViews"),
            ];
            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }
        }
    });

    task.with_namespace("kala.collection.immutable.primitive", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let mut templates = vec![
                (format!("Immutable{t}Collection"), "ImmutablePrimitiveCollection"),
                (
                    format!("AbstractImmutable{t}Collection"),
                    "AbstractImmutablePrimitiveCollection",
                ),
                (format!("Immutable{t}Seq"), "ImmutablePrimitiveSeq"),
                (format!("AbstractImmutable{t}Seq"), "AbstractImmutablePrimitiveSeq"),
                (format!("Immutable{t}Array"), "ImmutablePrimitiveArray"),
                (format!("Immutable{t}Set"), "ImmutablePrimitiveSet"),
                (format!("AbstractImmutable{t}Set"), "AbstractImmutablePrimitiveSet"),
            ];
            if has_tree_types(d) {
                templates.push((
                    format!("ImmutableSorted{t}ArraySet"),
                    "ImmutableSortedPrimitiveArraySet",
                ));
            }
            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }
        }
    });

    task.with_namespace("kala.collection.mutable.primitive", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let mut templates = vec![
                (format!("Mutable{t}Collection"), "MutablePrimitiveCollection"),
                (
                    format!("AbstractMutable{t}Collection"),
                    "AbstractMutablePrimitiveCollection",
                ),
                (format!("Mutable{t}Seq"), "MutablePrimitiveSeq"),
                (format!("Mutable{t}List"), "MutablePrimitiveList"),
                (format!("AbstractMutable{t}Seq"), "AbstractMutablePrimitiveSeq"),
                (format!("AbstractMutable{t}List"), "AbstractMutablePrimitiveList"),
                (
                    format!("AbstractMutable{t}ListFactory"),
                    "AbstractMutablePrimitiveListFactory",
                ),
                (format!("Mutable{t}SeqIterator"), "MutablePrimitiveSeqIterator"),
                (format!("Mutable{t}ListIterator"), "MutablePrimitiveListIterator"),
                (format!("Mutable{t}Array"), "MutablePrimitiveArray"),
            ];

            // Boolean lists are bit-packed and hand-written.
            if d.kind != PrimitiveKind::Boolean {
                templates.push((format!("Mutable{t}ArrayList"), "MutablePrimitiveArrayList"));
            }

            templates.extend([
                (format!("Mutable{t}Set"), "MutablePrimitiveSet"),
                (format!("AbstractMutable{t}Set"), "AbstractMutablePrimitiveSet"),
                (
                    format!("AbstractMutable{t}SetFactory"),
                    "AbstractMutablePrimitiveSetFactory",
                ),
            ]);
            if has_tree_types(d) {
                templates.push((format!("Mutable{t}TreeSet"), "MutablePrimitiveTreeSet"));
            }

            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }
        }
    });

    task
}
