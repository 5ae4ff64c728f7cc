//! # primgen
//!
//! Generates near-duplicate per-primitive Java sources from templates.
//!
//! One template per collection or value shape is expanded across the eight
//! primitive kinds (boolean, byte, short, int, long, float, double, char),
//! and the results are written to a generated-source tree the host build
//! compiles alongside hand-written code.
//!
//! ## Quick Start
//!
//! ```ignore
//! use primgen::prelude::*;
//!
//! let registry = Registry::standard();
//! let mut task = GenerateTask::new();
//! task.with_namespace("kala.function", |ns| {
//!     for d in registry.all() {
//!         let model = TemplateModel::single(d);
//!         ns.generate(format!("{}Hasher", d.type_name), model, "PrimitiveHasher");
//!     }
//! });
//!
//! let report = TemplateExpander::new(ExpanderConfig::new("src/main/templates", "build/generated"))
//!     .expand(&task)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Primitive kinds, descriptors, registry, models
//! - [`codegen`] - Directives, generate task, template expander
//! - [`catalog`] - Built-in generation plans
//! - [`cli`] / [`commands`] - The `primgen` command line

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod prelude;

/// Primitive registry and template models.
pub mod core {
    pub use primgen_core::*;
}

/// Template expansion.
pub mod codegen {
    pub use primgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use catalog::Plan;
pub use primgen_codegen::{
    CodegenError, ExpanderConfig, ExpansionReport, GenerateTask, TemplateExpander,
};
pub use primgen_core::{PrimitiveDescriptor, PrimitiveKind, Registry, TemplateModel};
