//! Assembly of the execution plan handed to the analysis driver.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::config::{Config, get_config};
use crate::error::LinterError;
use crate::file_finder::resolve_files;
use crate::formatter::{Formatter, FormatterRegistry};
use crate::rule::{Rule, RuleRegistry};
use crate::selector::{select_formatter, select_rules};

/// Raw invocation inputs, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Configuration file; `None` uses the default configuration.
    pub config_path: Option<PathBuf>,

    /// Space-separated exclude patterns.
    pub exclude: String,

    /// Formatter name; `None` or empty selects `cli`.
    pub formatter: Option<String>,

    /// Include patterns.
    pub patterns: Vec<String>,
}

/// The catalogs a plan is resolved against.
#[derive(Debug)]
pub struct Catalogs {
    /// Rules enabled when no configuration file is given.
    pub default_rules: RuleRegistry,
    /// Every rule a configuration may name.
    pub all_rules: RuleRegistry,
    pub formatters: FormatterRegistry,
}

impl Catalogs {
    /// The catalogs shipped with relint.
    pub fn builtin() -> Self {
        Self {
            default_rules: RuleRegistry::default_catalog(),
            all_rules: RuleRegistry::full_catalog(),
            formatters: FormatterRegistry::builtin(),
        }
    }
}

/// Everything the analysis driver needs for one run.
pub struct ExecutionPlan {
    pub rules: Vec<Arc<dyn Rule>>,
    pub formatter: Arc<dyn Formatter>,
    pub config: Config,
    pub files: Vec<String>,
}

impl ExecutionPlan {
    /// Resolves `options` against `catalogs`.
    ///
    /// Fails on the first error; no partial plan is ever produced.
    pub fn build(options: &PlanOptions, catalogs: &Catalogs) -> Result<Self, LinterError> {
        let config = get_config(options.config_path.as_deref(), &catalogs.default_rules)?;
        let rules = select_rules(&config, &catalogs.all_rules)?;
        let formatter = select_formatter(options.formatter.as_deref(), &catalogs.formatters)?;
        let files = resolve_files(&options.patterns, &options.exclude)?;

        info!(
            "Planned {} rules over {} files with the '{}' formatter",
            rules.len(),
            files.len(),
            formatter.name()
        );

        Ok(Self {
            rules,
            formatter,
            config,
            files,
        })
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Serializable view of the plan.
    pub fn summary(&self) -> PlanSummary<'_> {
        PlanSummary {
            rules: self.rule_names(),
            formatter: self.formatter.name(),
            config: &self.config,
            files: &self.files,
        }
    }
}

impl fmt::Debug for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionPlan")
            .field("rules", &self.rule_names())
            .field("formatter", &self.formatter.name())
            .field("config", &self.config)
            .field("files", &self.files)
            .finish()
    }
}

/// See [`ExecutionPlan::summary`].
#[derive(Debug, Serialize)]
pub struct PlanSummary<'a> {
    pub rules: Vec<&'a str>,
    pub formatter: &'a str,
    pub config: &'a Config,
    pub files: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_with_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("main.go"), "package main").unwrap();

        let options = PlanOptions {
            patterns: vec![format!("{}/*.go", dir.path().display())],
            ..PlanOptions::default()
        };
        let catalogs = Catalogs::builtin();
        let plan = ExecutionPlan::build(&options, &catalogs).unwrap();

        assert_eq!(plan.rules.len(), catalogs.default_rules.len());
        assert_eq!(plan.formatter.name(), "cli");
        assert_eq!(plan.config.severity, Some(Severity::Warning));
        assert_eq!(plan.files.len(), 1);
    }

    #[test]
    fn test_summary_serializes() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("relint.toml");
        fs::write(&config_path, "severity = \"error\"\n[rules.cyclomatic]\narguments = [3]\n")
            .unwrap();

        let options = PlanOptions {
            config_path: Some(config_path),
            formatter: Some("json".to_string()),
            patterns: vec![format!("{}/*.go", dir.path().display())],
            ..PlanOptions::default()
        };
        let plan = ExecutionPlan::build(&options, &Catalogs::builtin()).unwrap();
        let summary = serde_json::to_value(plan.summary()).unwrap();

        assert_eq!(
            summary,
            serde_json::json!({
                "rules": ["cyclomatic"],
                "formatter": "json",
                "config": {
                    "confidence": 0.0,
                    "severity": "error",
                    "rules": {
                        "cyclomatic": { "severity": "error", "arguments": [3] }
                    }
                },
                "files": []
            })
        );
    }
}
