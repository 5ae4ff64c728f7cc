//! # primgen Core
//!
//! Primitive kind registry and template models.
//!
//! This crate provides:
//! - The closed set of eight primitive kinds
//! - Per-kind descriptors with the attributes templates consume
//! - The registry with its filtered views and pair combinations
//! - Template models (single and paired) with override tables
//! - Seeded, reproducible per-type constants

pub mod descriptor;
pub mod error;
pub mod kind;
pub mod model;
pub mod registry;
pub mod seed;

pub use descriptor::{Helper, Literals, PrimitiveDescriptor};
pub use error::CoreError;
pub use kind::PrimitiveKind;
pub use model::{ModelShape, PairModel, Property, TemplateModel};
pub use registry::Registry;
pub use seed::SeededConstants;
