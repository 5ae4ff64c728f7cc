//! Primitive kinds.
//!
//! The generator specializes templates for exactly eight scalar kinds. The
//! set is closed; every per-kind attribute is a `const fn` of the variant.

use crate::error::CoreError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the eight primitive kinds, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PrimitiveKind {
    /// `boolean`.
    Boolean,
    /// `byte`.
    Byte,
    /// `short`.
    Short,
    /// `int`.
    Int,
    /// `long`.
    Long,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// `char`.
    Char,
}

impl PrimitiveKind {
    /// All kinds in registry order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
    ];

    /// Position of this kind in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the canonical name (`Int`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Char => "Char",
        }
    }

    /// Returns the lowercase keyword spelling (`int`).
    #[must_use]
    pub const fn primitive_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
        }
    }

    /// Returns the boxed wrapper class name.
    #[must_use]
    pub const fn wrapper_name(self) -> &'static str {
        match self {
            Self::Int => "Integer",
            Self::Char => "Character",
            other => other.name(),
        }
    }

    /// Returns the single-letter variable name hint.
    #[must_use]
    pub const fn var(self) -> &'static str {
        match self {
            Self::Boolean | Self::Byte => "b",
            Self::Short => "s",
            Self::Int => "i",
            Self::Long => "l",
            Self::Float => "f",
            Self::Double => "d",
            Self::Char => "c",
        }
    }

    /// Returns true for the kinds the host library already ships
    /// primitive iterator and stream facilities for.
    #[must_use]
    pub const fn is_specialized(self) -> bool {
        matches!(self, Self::Int | Self::Long | Self::Double)
    }

    /// Returns true for the integral number kinds. `Char` is not one.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Int | Self::Long)
    }

    /// Returns true for `Float` and `Double`.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Returns true for narrow kinds that arithmetic promotes to `int`.
    #[must_use]
    pub const fn lift_to_int(self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Char)
    }

    /// Returns the integral kind holding the bit pattern of a floating kind.
    #[must_use]
    pub const fn bits_kind(self) -> Option<Self> {
        match self {
            Self::Float => Some(Self::Int),
            Self::Double => Some(Self::Long),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = CoreError;

    /// Parses either spelling (`Int` or `int`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::unknown_primitive(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, kind) in PrimitiveKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_wrapper_names() {
        assert_eq!(PrimitiveKind::Int.wrapper_name(), "Integer");
        assert_eq!(PrimitiveKind::Char.wrapper_name(), "Character");
        assert_eq!(PrimitiveKind::Boolean.wrapper_name(), "Boolean");
        assert_eq!(PrimitiveKind::Double.wrapper_name(), "Double");
    }

    #[test]
    fn test_flags() {
        let specialized: Vec<_> = PrimitiveKind::ALL
            .into_iter()
            .filter(|k| k.is_specialized())
            .collect();
        assert_eq!(
            specialized,
            vec![PrimitiveKind::Int, PrimitiveKind::Long, PrimitiveKind::Double]
        );

        assert!(!PrimitiveKind::Char.is_integral());
        assert!(PrimitiveKind::Char.lift_to_int());
        assert!(PrimitiveKind::Float.is_floating());
        assert!(!PrimitiveKind::Int.lift_to_int());
    }

    #[test]
    fn test_bits_kind() {
        assert_eq!(PrimitiveKind::Float.bits_kind(), Some(PrimitiveKind::Int));
        assert_eq!(PrimitiveKind::Double.bits_kind(), Some(PrimitiveKind::Long));
        assert_eq!(PrimitiveKind::Long.bits_kind(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Int".parse::<PrimitiveKind>(), Ok(PrimitiveKind::Int));
        assert_eq!("char".parse::<PrimitiveKind>(), Ok(PrimitiveKind::Char));
        assert_eq!("DOUBLE".parse::<PrimitiveKind>(), Ok(PrimitiveKind::Double));
        assert_eq!(
            "void".parse::<PrimitiveKind>(),
            Err(CoreError::unknown_primitive("void"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PrimitiveKind::Short.to_string(), "Short");
    }
}
