//! # primgen Codegen
//!
//! Template expansion of per-primitive sources.
//!
//! This crate provides:
//! - Generation directives grouped under namespaces
//! - The generate task with its input/output file sets
//! - Conversion of template models into render contexts
//! - The fail-fast template expander writing the generated-source tree

pub mod config;
pub mod context;
pub mod directive;
pub mod error;
pub mod expander;
pub mod task;
pub mod validation;

pub use config::ExpanderConfig;
pub use directive::{DirectiveState, GenerationDirective, Namespace};
pub use error::CodegenError;
pub use expander::{ExpansionReport, ReportEntry, TemplateExpander};
pub use task::GenerateTask;

/// Expands every directive of a task with the given configuration.
///
/// # Arguments
/// * `task` - Namespaces and directives to expand
/// * `config` - Template and output roots
///
/// # Returns
/// The report of written files, in declaration order.
///
/// # Errors
/// Returns `CodegenError` on the first directive that cannot be resolved,
/// rendered or written.
pub fn expand(
    task: &GenerateTask,
    config: ExpanderConfig,
) -> Result<ExpansionReport, CodegenError> {
    TemplateExpander::new(config).expand(task)
}
