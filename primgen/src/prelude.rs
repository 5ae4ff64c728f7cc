//! Prelude module for convenient imports.
//!
//! ```ignore
//! use primgen::prelude::*;
//! ```

// Registry and models
pub use primgen_core::{
    ModelShape, PairModel, PrimitiveDescriptor, PrimitiveKind, Property, Registry,
    SeededConstants, TemplateModel,
};

// Expansion
pub use primgen_codegen::{
    CodegenError, DirectiveState, ExpanderConfig, ExpansionReport, GenerateTask,
    GenerationDirective, Namespace, TemplateExpander,
};

// Plans
pub use crate::catalog::Plan;
