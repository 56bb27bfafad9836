//! Output module

mod plan;

use miette::{IntoDiagnostic, Result};
use relint_core::{ExecutionPlan, Failure, Severity};

pub use plan::output_plan;

/// Renders `failures` with the plan's formatter.
///
/// Returns whether any reported failure has error severity, which decides
/// the exit code.
pub fn output_failures(plan: &ExecutionPlan, failures: &[Failure]) -> Result<bool> {
    let rendered = plan
        .formatter
        .format(failures, &plan.config)
        .into_diagnostic()?;
    print!("{}", rendered);

    Ok(has_errors(plan, failures))
}

/// Whether a failure that passes its confidence threshold has error severity.
fn has_errors(plan: &ExecutionPlan, failures: &[Failure]) -> bool {
    failures.iter().any(|f| {
        f.confidence >= plan.config.confidence_for(&f.rule_name)
            && plan.config.severity_for(&f.rule_name) == Severity::Error
    })
}
