//! Render contexts.
//!
//! Turns a [`TemplateModel`] into the value tree the template engine sees.
//! Helpers become callable two-argument functions; nested descriptors become
//! nested maps; absent values become undefined.

use minijinja::Value;
use primgen_core::{Helper, PrimitiveDescriptor, Property, TemplateModel};

/// Builds the render context of a model.
#[must_use]
pub fn model_value(model: &TemplateModel) -> Value {
    Value::from_iter(
        model
            .properties()
            .iter()
            .map(|(key, prop)| (key.clone(), property_value(prop))),
    )
}

/// Converts one property.
#[must_use]
pub fn property_value(prop: &Property) -> Value {
    match prop {
        Property::Text(text) => Value::from(text.as_str()),
        Property::Flag(flag) => Value::from(*flag),
        // Undefined rather than none: strict mode refuses to print it.
        Property::Null => Value::UNDEFINED,
        Property::Map(map) => Value::from_iter(
            map.iter()
                .map(|(key, prop)| (key.clone(), property_value(prop))),
        ),
        Property::Descriptor(kind) => Value::from_iter(
            PrimitiveDescriptor::derive(*kind)
                .properties("")
                .iter()
                .map(|(key, prop)| (key.clone(), property_value(prop))),
        ),
        Property::Helper(helper) => helper_value(*helper),
    }
}

fn helper_value(helper: Helper) -> Value {
    Value::from_function(move |lhs: String, rhs: String| helper.apply(&lhs, &rhs))
}
