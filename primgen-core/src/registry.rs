//! Primitive registry.
//!
//! The registry is an immutable table of the eight descriptors, built once
//! and passed by reference to whatever declares generation directives.

use crate::descriptor::PrimitiveDescriptor;
use crate::kind::PrimitiveKind;
use crate::model::PairModel;
use std::sync::OnceLock;

/// Immutable table of all primitive descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    descriptors: [PrimitiveDescriptor; 8],
}

impl Registry {
    /// Builds the registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: PrimitiveKind::ALL.map(PrimitiveDescriptor::derive),
        }
    }

    /// Returns a registry shared for the lifetime of the process.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<Registry> = OnceLock::new();
        STANDARD.get_or_init(Self::new)
    }

    /// Returns the descriptor of a kind.
    #[must_use]
    pub fn get(&self, kind: PrimitiveKind) -> &PrimitiveDescriptor {
        &self.descriptors[kind.index()]
    }

    /// Returns all descriptors in registry order.
    #[must_use]
    pub fn all(&self) -> &[PrimitiveDescriptor] {
        &self.descriptors
    }

    /// Returns every descriptor except `Boolean`.
    pub fn all_without_boolean(&self) -> impl Iterator<Item = &PrimitiveDescriptor> {
        self.descriptors
            .iter()
            .filter(|d| d.kind != PrimitiveKind::Boolean)
    }

    /// Returns the specialized descriptors (`Int`, `Long`, `Double`).
    pub fn specialized(&self) -> impl Iterator<Item = &PrimitiveDescriptor> {
        self.descriptors.iter().filter(|d| d.is_specialized)
    }

    /// Returns the cross product of the specialized kinds, same-kind pairs
    /// included, first kind major.
    #[must_use]
    pub fn specialized_pairs(&self) -> Vec<PairModel> {
        let kinds: Vec<_> = self.specialized().map(|d| d.kind).collect();
        self.cross(&kinds)
    }

    /// Returns the cross product of `Boolean` and the specialized kinds,
    /// without the `Boolean`/`Boolean` pair.
    #[must_use]
    pub fn specialized_and_boolean_pairs(&self) -> Vec<PairModel> {
        let kinds: Vec<_> = std::iter::once(PrimitiveKind::Boolean)
            .chain(self.specialized().map(|d| d.kind))
            .collect();
        self.cross(&kinds)
            .into_iter()
            .filter(|pair| !is_boolean_pair(pair))
            .collect()
    }

    /// Returns every ordered pair of kinds except `Boolean`/`Boolean`.
    #[must_use]
    pub fn all_pairs(&self) -> Vec<PairModel> {
        self.cross(&PrimitiveKind::ALL)
            .into_iter()
            .filter(|pair| !is_boolean_pair(pair))
            .collect()
    }

    fn cross(&self, kinds: &[PrimitiveKind]) -> Vec<PairModel> {
        kinds
            .iter()
            .flat_map(move |&first| {
                kinds.iter().map(move |&second| {
                    PairModel::new(self.get(first).clone(), self.get(second).clone())
                })
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_boolean_pair(pair: &PairModel) -> bool {
    pair.kinds() == (PrimitiveKind::Boolean, PrimitiveKind::Boolean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_deterministic() {
        assert_eq!(Registry::new(), Registry::new());
        assert_eq!(Registry::standard(), &Registry::new());
    }

    #[test]
    fn test_all_order() {
        let registry = Registry::new();
        let kinds: Vec<_> = registry.all().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, PrimitiveKind::ALL.to_vec());
    }

    #[test]
    fn test_all_without_boolean() {
        let registry = Registry::new();
        let rest: Vec<_> = registry.all_without_boolean().collect();
        assert_eq!(rest.len(), 7);
        assert!(rest.iter().all(|d| d.kind != PrimitiveKind::Boolean));
    }

    #[test]
    fn test_get() {
        let registry = Registry::new();
        assert_eq!(registry.get(PrimitiveKind::Long).type_name, "Long");
        assert_eq!(registry.get(PrimitiveKind::Char).wrapper_type, "Character");
    }

    #[test]
    fn test_specialized_pairs() {
        let registry = Registry::new();
        let k = registry.specialized().count();
        assert_eq!(k, 3);

        let pairs = registry.specialized_pairs();
        assert_eq!(pairs.len(), k * k);
        assert!(pairs.iter().any(|p| p.kinds() == (PrimitiveKind::Int, PrimitiveKind::Int)));
        assert_eq!(pairs[0].kinds(), (PrimitiveKind::Int, PrimitiveKind::Int));
        assert_eq!(pairs[1].kinds(), (PrimitiveKind::Int, PrimitiveKind::Long));
        assert_eq!(pairs[8].kinds(), (PrimitiveKind::Double, PrimitiveKind::Double));
    }

    #[test]
    fn test_specialized_and_boolean_pairs() {
        let pairs = Registry::new().specialized_and_boolean_pairs();
        assert_eq!(pairs.len(), 15);
        assert!(pairs.iter().all(|p| !is_boolean_pair(p)));
        assert!(pairs.iter().any(|p| p.kinds() == (PrimitiveKind::Boolean, PrimitiveKind::Int)));
        assert!(pairs.iter().any(|p| p.kinds() == (PrimitiveKind::Long, PrimitiveKind::Long)));
    }

    #[test]
    fn test_all_pairs() {
        let pairs = Registry::new().all_pairs();
        assert_eq!(pairs.len(), 63);
        assert!(pairs.iter().all(|p| !is_boolean_pair(p)));
    }
}
