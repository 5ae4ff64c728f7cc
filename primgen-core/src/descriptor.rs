//! Primitive descriptors.
//!
//! A descriptor carries every attribute a template may reference for one
//! primitive kind. Descriptors are derived, never configured: the same kind
//! always yields the same descriptor.

use crate::kind::PrimitiveKind;
use serde::Serialize;

/// Literal values appropriate to a primitive kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literals {
    /// Numeric zero, absent for `Boolean`.
    #[serde(rename = "Zero")]
    pub zero: Option<String>,
    /// Default field value.
    #[serde(rename = "Default")]
    pub default: String,
}

impl Literals {
    fn derive(kind: PrimitiveKind) -> Self {
        let cast_zero = || format!("({}) 0", kind.primitive_name());
        let (zero, default) = match kind {
            PrimitiveKind::Int => (Some("0".to_string()), "0".to_string()),
            PrimitiveKind::Long => (Some("0L".to_string()), "0L".to_string()),
            PrimitiveKind::Char => (Some("'\\0'".to_string()), "'\\0'".to_string()),
            PrimitiveKind::Boolean => (None, "false".to_string()),
            _ => (Some(cast_zero()), cast_zero()),
        };
        Self { zero, default }
    }
}

/// Two-argument expression helpers exposed to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Helper {
    /// Equality comparison; bit-pattern based for floating kinds.
    PrimitiveEquals(PrimitiveKind),
    /// Negated [`Helper::PrimitiveEquals`].
    PrimitiveNotEquals(PrimitiveKind),
}

impl Helper {
    /// Returns the property name templates call the helper by.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PrimitiveEquals(_) => "PrimitiveEquals",
            Self::PrimitiveNotEquals(_) => "PrimitiveNotEquals",
        }
    }

    /// Builds the comparison expression for two operand expressions.
    #[must_use]
    pub fn apply(&self, lhs: &str, rhs: &str) -> String {
        let (kind, op) = match *self {
            Self::PrimitiveEquals(kind) => (kind, "=="),
            Self::PrimitiveNotEquals(kind) => (kind, "!="),
        };
        match kind {
            PrimitiveKind::Float => {
                format!("Float.floatToIntBits({lhs}) {op} Float.floatToIntBits({rhs})")
            }
            PrimitiveKind::Double => {
                format!("Double.doubleToLongBits({lhs}) {op} Double.doubleToLongBits({rhs})")
            }
            _ => format!("{lhs} {op} {rhs}"),
        }
    }
}

/// Template attributes of one primitive kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimitiveDescriptor {
    /// The described kind.
    #[serde(skip)]
    pub kind: PrimitiveKind,
    /// Canonical name.
    #[serde(rename = "Type")]
    pub type_name: &'static str,
    /// Lowercase keyword spelling.
    #[serde(rename = "PrimitiveType")]
    pub primitive_type: &'static str,
    /// Boxed wrapper class name.
    #[serde(rename = "WrapperType")]
    pub wrapper_type: &'static str,
    /// Variable name hint.
    #[serde(rename = "Var")]
    pub var: &'static str,
    /// Whether the kind is specialized.
    #[serde(rename = "IsSpecialized")]
    pub is_specialized: bool,
    /// Whether the kind is integral.
    #[serde(rename = "IsIntegral")]
    pub is_integral: bool,
    /// Whether the kind is floating point.
    #[serde(rename = "IsFloating")]
    pub is_floating: bool,
    /// Literal values.
    #[serde(rename = "Values")]
    pub values: Literals,
    /// Whether arithmetic promotes the kind to `int`.
    #[serde(rename = "LiftToInt")]
    pub lift_to_int: bool,
    /// Integral kind holding the bit pattern (floating kinds only).
    #[serde(rename = "BitsType", skip_serializing_if = "Option::is_none")]
    pub bits_type: Option<PrimitiveKind>,
    /// Bit conversion method (floating kinds only).
    #[serde(rename = "ToBits", skip_serializing_if = "Option::is_none")]
    pub to_bits: Option<&'static str>,
    /// Raw bit conversion method (floating kinds only).
    #[serde(rename = "ToRawBits", skip_serializing_if = "Option::is_none")]
    pub to_raw_bits: Option<&'static str>,
}

impl PrimitiveDescriptor {
    /// Derives the descriptor of a kind.
    #[must_use]
    pub fn derive(kind: PrimitiveKind) -> Self {
        let (to_bits, to_raw_bits) = match kind {
            PrimitiveKind::Float => (
                Some("Float.floatToIntBits"),
                Some("Float.floatToRawIntBits"),
            ),
            PrimitiveKind::Double => (
                Some("Double.doubleToLongBits"),
                Some("Double.doubleToRawLongBits"),
            ),
            _ => (None, None),
        };

        Self {
            kind,
            type_name: kind.name(),
            primitive_type: kind.primitive_name(),
            wrapper_type: kind.wrapper_name(),
            var: kind.var(),
            is_specialized: kind.is_specialized(),
            is_integral: kind.is_integral(),
            is_floating: kind.is_floating(),
            values: Literals::derive(kind),
            lift_to_int: kind.lift_to_int(),
            bits_type: kind.bits_kind(),
            to_bits,
            to_raw_bits,
        }
    }

    /// Returns the helpers every descriptor exposes.
    #[must_use]
    pub const fn helpers(&self) -> [Helper; 2] {
        [
            Helper::PrimitiveEquals(self.kind),
            Helper::PrimitiveNotEquals(self.kind),
        ]
    }
}
