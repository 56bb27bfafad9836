//! Plan output

use miette::{IntoDiagnostic, Result};
use relint_core::ExecutionPlan;

pub fn output_plan(plan: &ExecutionPlan) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&plan.summary()).into_diagnostic()?
    );
    Ok(())
}
