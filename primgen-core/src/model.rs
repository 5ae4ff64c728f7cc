//! Template models.
//!
//! A model is what a template renders against. It is one of two shapes (a
//! single primitive or a numbered pair of primitives) plus an optional table
//! of extra keys that override or extend the derived properties.

use crate::descriptor::{Helper, PrimitiveDescriptor};
use crate::kind::PrimitiveKind;
use std::collections::BTreeMap;

/// A value in the flattened property view of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    /// String scalar.
    Text(String),
    /// Boolean scalar.
    Flag(bool),
    /// Absent value.
    Null,
    /// Nested string-keyed mapping.
    Map(BTreeMap<String, Property>),
    /// Nested descriptor of another kind.
    Descriptor(PrimitiveKind),
    /// Two-argument expression helper.
    Helper(Helper),
}

impl From<&str> for Property {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Property {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Property {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<PrimitiveKind> for Property {
    fn from(value: PrimitiveKind) -> Self {
        Self::Descriptor(value)
    }
}

impl<T: Into<Property>> From<Option<T>> for Property {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl PrimitiveDescriptor {
    /// Flattens the descriptor into template properties, appending `suffix`
    /// to every key.
    #[must_use]
    pub fn properties(&self, suffix: &str) -> BTreeMap<String, Property> {
        let mut values = BTreeMap::new();
        values.insert("Zero".to_string(), Property::from(self.values.zero.clone()));
        values.insert(
            "Default".to_string(),
            Property::from(self.values.default.clone()),
        );

        let mut entries: Vec<(&str, Property)> = vec![
            ("Type", self.type_name.into()),
            ("PrimitiveType", self.primitive_type.into()),
            ("WrapperType", self.wrapper_type.into()),
            ("Var", self.var.into()),
            ("IsSpecialized", self.is_specialized.into()),
            ("IsIntegral", self.is_integral.into()),
            ("IsFloating", self.is_floating.into()),
            ("Values", Property::Map(values)),
            ("LiftToInt", self.lift_to_int.into()),
        ];
        if let Some(bits) = self.bits_type {
            entries.push(("BitsType", bits.into()));
        }
        if let Some(to_bits) = self.to_bits {
            entries.push(("ToBits", to_bits.into()));
        }
        if let Some(to_raw_bits) = self.to_raw_bits {
            entries.push(("ToRawBits", to_raw_bits.into()));
        }
        for helper in self.helpers() {
            entries.push((helper.name(), Property::Helper(helper)));
        }

        entries
            .into_iter()
            .map(|(key, value)| (format!("{key}{suffix}"), value))
            .collect()
    }
}

/// Two descriptors combined for binary-operator templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairModel {
    /// Descriptor exposed with suffix `1`.
    pub first: PrimitiveDescriptor,
    /// Descriptor exposed with suffix `2`.
    pub second: PrimitiveDescriptor,
}

impl PairModel {
    /// Creates a pair model.
    #[must_use]
    pub fn new(first: PrimitiveDescriptor, second: PrimitiveDescriptor) -> Self {
        Self { first, second }
    }

    /// Returns the pair as kinds.
    #[must_use]
    pub fn kinds(&self) -> (PrimitiveKind, PrimitiveKind) {
        (self.first.kind, self.second.kind)
    }

    /// Returns true if both sides are the same kind.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.first.kind == self.second.kind
    }

    /// Flattens both descriptors, numbered `1` and `2`.
    #[must_use]
    pub fn properties(&self) -> BTreeMap<String, Property> {
        let mut props = self.first.properties("1");
        props.extend(self.second.properties("2"));
        props
    }
}

/// The shape of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelShape {
    /// A single primitive.
    Single(PrimitiveDescriptor),
    /// Two numbered primitives.
    Pair(PairModel),
}

/// A model handed to one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateModel {
    shape: ModelShape,
    extras: BTreeMap<String, Property>,
}

impl TemplateModel {
    /// Creates a single-primitive model.
    #[must_use]
    pub fn single(descriptor: &PrimitiveDescriptor) -> Self {
        Self {
            shape: ModelShape::Single(descriptor.clone()),
            extras: BTreeMap::new(),
        }
    }

    /// Creates a paired model.
    #[must_use]
    pub fn pair(pair: PairModel) -> Self {
        Self {
            shape: ModelShape::Pair(pair),
            extras: BTreeMap::new(),
        }
    }

    /// Adds or replaces an extra key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Property>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces an extra key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Property>) {
        self.extras.insert(key.into(), value.into());
    }

    /// Returns the model shape.
    #[must_use]
    pub fn shape(&self) -> &ModelShape {
        &self.shape
    }

    /// Returns the extra keys.
    #[must_use]
    pub fn extras(&self) -> &BTreeMap<String, Property> {
        &self.extras
    }

    /// Returns the full flattened property map. Extra keys win over
    /// derived keys of the same name.
    #[must_use]
    pub fn properties(&self) -> BTreeMap<String, Property> {
        let mut props = match &self.shape {
            ModelShape::Single(descriptor) => descriptor.properties(""),
            ModelShape::Pair(pair) => pair.properties(),
        };
        props.extend(self.extras.iter().map(|(k, v)| (k.clone(), v.clone())));
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(kind: PrimitiveKind) -> PrimitiveDescriptor {
        PrimitiveDescriptor::derive(kind)
    }

    #[test]
    fn test_single_properties() {
        let model = TemplateModel::single(&descriptor(PrimitiveKind::Int));
        let props = model.properties();

        assert_eq!(props["Type"], Property::from("Int"));
        assert_eq!(props["WrapperType"], Property::from("Integer"));
        assert_eq!(props["IsSpecialized"], Property::Flag(true));
        assert_eq!(
            props["PrimitiveEquals"],
            Property::Helper(Helper::PrimitiveEquals(PrimitiveKind::Int))
        );
        assert!(!props.contains_key("BitsType"));
    }

    #[test]
    fn test_boolean_zero_is_null() {
        let props = TemplateModel::single(&descriptor(PrimitiveKind::Boolean)).properties();
        let Property::Map(values) = &props["Values"] else {
            panic!("Values should be a map");
        };
        assert_eq!(values["Zero"], Property::Null);
        assert_eq!(values["Default"], Property::from("false"));
    }

    #[test]
    fn test_floating_properties() {
        let props = TemplateModel::single(&descriptor(PrimitiveKind::Float)).properties();
        assert_eq!(props["BitsType"], Property::Descriptor(PrimitiveKind::Int));
        assert_eq!(props["ToBits"], Property::from("Float.floatToIntBits"));
    }

    #[test]
    fn test_pair_properties_are_numbered() {
        let pair = PairModel::new(
            descriptor(PrimitiveKind::Int),
            descriptor(PrimitiveKind::Long),
        );
        assert!(!pair.is_homogeneous());

        let props = TemplateModel::pair(pair).properties();
        assert_eq!(props["Type1"], Property::from("Int"));
        assert_eq!(props["Type2"], Property::from("Long"));
        assert_eq!(props["PrimitiveType2"], Property::from("long"));
        assert!(props.contains_key("PrimitiveNotEquals1"));
        assert!(!props.contains_key("Type"));
    }

    #[test]
    fn test_extras_override_derived_keys() {
        let model = TemplateModel::single(&descriptor(PrimitiveKind::Byte))
            .with("Type", "Octet")
            .with("StepType", "int")
            .with("Missing", None::<String>);
        let props = model.properties();

        assert_eq!(props["Type"], Property::from("Octet"));
        assert_eq!(props["StepType"], Property::from("int"));
        assert_eq!(props["Missing"], Property::Null);
        assert_eq!(model.extras().len(), 3);
    }
}
