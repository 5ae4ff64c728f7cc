//! Plan for the base library: comparators, iterators, factories, options,
//! values, functional interfaces, tuples and ranges.

use primgen_codegen::GenerateTask;
use primgen_core::seed::RANGE_SEED;
use primgen_core::{PairModel, PrimitiveKind, Registry, SeededConstants, TemplateModel};

/// Returns the class name of a primitive tuple: `IntTuple2` for a
/// homogeneous pair, `IntLongTuple2` otherwise.
#[must_use]
pub fn tuple_class_name(pair: &PairModel) -> String {
    if pair.is_homogeneous() {
        format!("{}Tuple2", pair.first.type_name)
    } else {
        format!("{}{}Tuple2", pair.first.type_name, pair.second.type_name)
    }
}

/// Step type, maximum step and maximum reverse step of an integral range.
/// `None` for kinds that use the floating range template.
fn integral_range_bounds(
    kind: PrimitiveKind,
) -> Option<(&'static str, &'static str, &'static str)> {
    let step_type = match kind {
        PrimitiveKind::Int | PrimitiveKind::Long => "long",
        _ => "int",
    };
    let max_step = match kind {
        PrimitiveKind::Byte => "Byte.MAX_VALUE - Byte.MIN_VALUE",
        PrimitiveKind::Short => "Short.MAX_VALUE - Short.MIN_VALUE",
        PrimitiveKind::Char => "Character.MAX_VALUE",
        PrimitiveKind::Int => "(long) Integer.MAX_VALUE - Integer.MIN_VALUE",
        PrimitiveKind::Long => "Long.MAX_VALUE",
        _ => return None,
    };
    let max_reverse_step = match kind {
        PrimitiveKind::Long => "Long.MIN_VALUE",
        _ => "-MAX_STEP",
    };
    Some((step_type, max_step, max_reverse_step))
}

/// Builds the base library plan.
#[must_use]
pub fn base(registry: &Registry) -> GenerateTask {
    let mut task = GenerateTask::new();

    task.with_namespace("kala.comparator.primitive", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let templates = [
                (format!("{t}Comparator"), "PrimitiveComparator"),
                (format!("{t}Comparators"), "PrimitiveComparators"),
            ];
            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }
        }
    });

    task.with_namespace("kala.collection.base.primitive", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let iterator_type = if d.is_specialized {
                format!("java.util.PrimitiveIterator.Of{t}")
            } else {
                format!("{t}Iterator")
            };
            let model = TemplateModel::single(d).with("PrimitiveIteratorType", iterator_type);

            ns.generate(format!("{t}Arrays"), model.clone(), "PrimitiveArrays");
            ns.generate(format!("{t}Traversable"), model.clone(), "PrimitiveTraversable");
            ns.generate(format!("{t}Iterator"), model.clone(), "PrimitiveIterator");
            ns.generate(format!("{t}Iterators"), model.clone(), "PrimitiveIterators");
            ns.generate(format!("{t}Growable"), model.clone(), "PrimitiveGrowable");
            ns.generate(format!("Abstract{t}Iterator"), model, "AbstractPrimitiveIterator");
        }
    });

    task.with_namespace("kala.collection.factory.primitive", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let templates = [
                (format!("{t}CollectionFactory"), "PrimitiveCollectionFactory"),
                (format!("{t}CollectionBuilder"), "PrimitiveCollectionBuilder"),
            ];
            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }
        }
    });

    task.with_namespace("kala.control.primitive", |ns| {
        for d in registry.all_without_boolean() {
            let t = d.type_name;
            ns.generate(format!("{t}Option"), TemplateModel::single(d), "PrimitiveOption")
                .generate(format!("{t}Try"), TemplateModel::single(d), "PrimitiveTry");
        }
    });

    task.with_namespace("kala.value.primitive", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let templates = [
                (format!("{t}Value"), "PrimitiveValue"),
                (format!("Mutable{t}Value"), "MutablePrimitiveValue"),
                (format!("Abstract{t}Value"), "AbstractPrimitiveValue"),
                (format!("Default{t}Value"), "DefaultPrimitiveValue"),
                (format!("Delegate{t}Value"), "DelegatePrimitiveValue"),
                (format!("AbstractMutable{t}Value"), "AbstractMutablePrimitiveValue"),
                (format!("DelegateMutable{t}Value"), "DelegateMutablePrimitiveValue"),
                (format!("{t}Var"), "PrimitiveVar"),
                (format!("Volatile{t}Var"), "VolatilePrimitiveVar"),
                (format!("Lazy{t}Value"), "LazyPrimitiveValue"),
                (format!("LateInit{t}Value"), "LateInitPrimitiveValue"),
                (format!("MutableLateInit{t}Value"), "MutableLateInitPrimitiveValue"),
            ];
            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }

            if matches!(d.kind, PrimitiveKind::Int | PrimitiveKind::Long) {
                let model = TemplateModel::single(d);
                ns.generate(format!("Atomic{t}Var"), model, "AtomicPrimitiveVar");
            }
        }
    });

    task.with_namespace("kala.function", |ns| {
        for d in registry.all() {
            let t = d.type_name;
            let mut templates = vec![
                (format!("Checked{t}Consumer"), "CheckedPrimitiveConsumer"),
                (format!("Checked{t}Supplier"), "CheckedPrimitiveSupplier"),
                (format!("{t}Hasher"), "PrimitiveHasher"),
                (format!("Obj{t}BiFunction"), "ObjPrimitiveBiFunction"),
                (format!("{t}ObjBiFunction"), "PrimitiveObjBiFunction"),
                (format!("Indexed{t}UnaryOperator"), "IndexedPrimitiveUnaryOperator"),
            ];

            // The host library already ships these for the specialized kinds.
            if !d.is_specialized {
                if d.kind != PrimitiveKind::Boolean {
                    templates.push((format!("{t}Supplier"), "PrimitiveSupplier"));
                }
                templates.extend([
                    (format!("{t}Consumer"), "PrimitiveConsumer"),
                    (format!("{t}Predicate"), "PrimitivePredicate"),
                    (format!("{t}Function"), "PrimitiveFunction"),
                    (format!("{t}UnaryOperator"), "PrimitiveUnaryOperator"),
                    (format!("{t}BinaryOperator"), "PrimitiveBinaryOperator"),
                ]);
            }

            for (output, template) in templates {
                ns.generate(output, TemplateModel::single(d), template);
            }
        }
    });

    task.with_namespace("kala.tuple.primitive", |ns| {
        for pair in registry.specialized_pairs() {
            let class_name = tuple_class_name(&pair);
            let model = TemplateModel::pair(pair).with("ClassName", class_name.as_str());
            ns.generate(class_name, model, "PrimitiveTuple2");
        }
    });

    task.with_namespace("kala.internal", |ns| {
        for d in registry.all() {
            ns.generate(
                format!("Internal{}ArrayBuilder", d.type_name),
                TemplateModel::single(d),
                "InternalPrimitiveArrayBuilder",
            );
        }
    });

    task.with_namespace("kala.range.primitive", |ns| {
        let mut constants = SeededConstants::new(RANGE_SEED);
        for d in registry.all_without_boolean() {
            let t = d.type_name;
            let mut model = TemplateModel::single(d);
            model.insert("SerialVersionUID", constants.next_serial_version_uid());
            model.insert("HashMagic", constants.next_hash_magic());

            match integral_range_bounds(d.kind) {
                Some((step_type, max_step, max_reverse_step)) => {
                    model.insert("StepType", step_type);
                    model.insert("MaxStep", max_step);
                    model.insert("MaxReverseStep", max_reverse_step);
                    ns.generate(format!("{t}Range"), model, "IntegralRange");
                }
                None => {
                    ns.generate(format!("{t}Range"), model, "FloatingRange");
                }
            }
        }
    });

    task
}
