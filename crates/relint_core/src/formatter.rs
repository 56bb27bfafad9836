//! Output formatters.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::config::{Config, Severity};
use crate::error::LinterError;
use crate::failure::Failure;
use crate::registry::{Named, Registry};

/// Name of the formatter used when none is requested.
pub const DEFAULT_FORMATTER: &str = "cli";

/// Renders a collection of failures.
pub trait Formatter: Named + Send + Sync {
    /// Renders `failures` using the severities and thresholds in `config`.
    fn format(&self, failures: &[Failure], config: &Config) -> Result<String, LinterError>;
}

/// Registry of formatters keyed by name.
pub type FormatterRegistry = Registry<dyn Formatter>;

impl Registry<dyn Formatter> {
    /// Catalog of the formatters shipped with relint.
    pub fn builtin() -> Self {
        Registry::new([
            Arc::new(CliFormatter) as Arc<dyn Formatter>,
            Arc::new(JsonFormatter),
        ])
    }
}

/// Failures at or above their rule's confidence threshold.
fn reportable<'a>(
    failures: &'a [Failure],
    config: &'a Config,
) -> impl Iterator<Item = &'a Failure> + 'a {
    failures
        .iter()
        .filter(|f| f.confidence >= config.confidence_for(&f.rule_name))
}

/// Human-readable text grouped by file.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliFormatter;

impl Named for CliFormatter {
    fn name(&self) -> &str {
        "cli"
    }
}

impl Formatter for CliFormatter {
    fn format(&self, failures: &[Failure], config: &Config) -> Result<String, LinterError> {
        let mut by_path: BTreeMap<&str, Vec<&Failure>> = BTreeMap::new();
        for failure in reportable(failures, config) {
            by_path.entry(failure.path.as_str()).or_default().push(failure);
        }

        if by_path.is_empty() {
            return Ok("No problems found\n".to_string());
        }

        let mut out = String::new();
        let mut errors = 0;
        let mut warnings = 0;

        for (path, failures) in &by_path {
            writeln!(out, "{}:", path)?;
            for failure in failures {
                let severity = config.severity_for(&failure.rule_name);
                match severity {
                    Severity::Error => errors += 1,
                    Severity::Warning => warnings += 1,
                }
                writeln!(
                    out,
                    "  {}:{} {} [{}]: {}",
                    failure.position.line,
                    failure.position.column,
                    severity.as_str(),
                    failure.rule_name,
                    failure.message
                )?;
            }
            out.push('\n');
        }

        writeln!(
            out,
            "Found {} problems ({} errors, {} warnings)",
            errors + warnings,
            errors,
            warnings
        )?;
        Ok(out)
    }
}

/// Pretty-printed JSON array of failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl Named for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, failures: &[Failure], config: &Config) -> Result<String, LinterError> {
        let output: Vec<_> = reportable(failures, config)
            .map(|f| {
                serde_json::json!({
                    "rule": f.rule_name,
                    "severity": config.severity_for(&f.rule_name),
                    "message": f.message,
                    "path": f.path,
                    "position": f.position,
                    "confidence": f.confidence,
                })
            })
            .collect();

        serde_json::to_string_pretty(&output)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| LinterError::format(e.to_string()))
    }
}
