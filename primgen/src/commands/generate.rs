use crate::cli::Roots;
use anyhow::Context;
use primgen_codegen::{DirectiveState, ExpanderConfig, ExpansionReport, TemplateExpander};
use primgen_core::Registry;
use tracing::info;

/// Expands every directive of the selected plan.
///
/// # Errors
/// Fails on the first directive that cannot be expanded. Files written
/// before the failure are kept.
pub fn generate(roots: &Roots) -> anyhow::Result<ExpansionReport> {
    let task = roots.plan.build(Registry::standard());
    let config = ExpanderConfig::new(roots.templates.clone(), roots.output.clone());
    let report = TemplateExpander::new(config)
        .expand(&task)
        .with_context(|| format!("failed to expand plan {:?}", roots.plan))?;

    info!(
        written = report.count(DirectiveState::Written),
        output = %roots.output.display(),
        "generation complete"
    );
    Ok(report)
}
