//! Error types for the primitive registry.

use thiserror::Error;

/// Error type for registry lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Name does not belong to the fixed set of primitive kinds.
    #[error("unknown primitive kind '{name}'")]
    UnknownPrimitive {
        /// The rejected name.
        name: String,
    },
}

impl CoreError {
    /// Creates an unknown primitive error.
    pub fn unknown_primitive(name: impl Into<String>) -> Self {
        Self::UnknownPrimitive { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_primitive_display() {
        let err = CoreError::unknown_primitive("void");
        assert_eq!(err.to_string(), "unknown primitive kind 'void'");
    }
}
