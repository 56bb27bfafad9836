//! Linter configuration.
//!
//! A configuration is either decoded from a TOML file or built from the
//! default rule catalog, and is then normalized so that every rule entry
//! carries a severity.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LinterError;
use crate::rule::RuleRegistry;

/// Severity reported for a rule's failures.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should be reviewed.
    #[default]
    Warning,
    /// Must be fixed.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Per-rule overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Severity for this rule; unset means "inherit the global one".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Confidence threshold for this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Rule-specific arguments, passed through untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<toml::Value>,
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global confidence threshold.
    #[serde(default)]
    pub confidence: f64,

    /// Global severity applied to rules without their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Enabled rules and their overrides.
    #[serde(default, alias = "rule")]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// `path` is only used to label errors.
    pub fn from_toml(content: &str, path: impl AsRef<Path>) -> Result<Self, LinterError> {
        toml::from_str(content)
            .map_err(|e| LinterError::config_parse(path.as_ref(), e.to_string().trim()))
    }

    /// Confidence threshold in effect for `rule_name`.
    pub fn confidence_for(&self, rule_name: &str) -> f64 {
        self.rules
            .get(rule_name)
            .and_then(|r| r.confidence)
            .unwrap_or(self.confidence)
    }

    /// Severity in effect for `rule_name`, falling back to warning.
    pub fn severity_for(&self, rule_name: &str) -> Severity {
        self.rules
            .get(rule_name)
            .and_then(|r| r.severity)
            .or(self.severity)
            .unwrap_or_default()
    }
}

/// Builds the configuration used when no file is given: every rule of
/// `default_rules` enabled with no overrides.
pub fn default_config(default_rules: &RuleRegistry) -> Config {
    Config {
        confidence: 0.0,
        severity: Some(Severity::Warning),
        rules: default_rules
            .names()
            .into_iter()
            .map(|name| (name.to_string(), RuleConfig::default()))
            .collect(),
    }
}

/// Reads and decodes the configuration file at `path`.
///
/// There is no fallback to defaults: any failure is returned.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, LinterError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|e| LinterError::config_read(path, e))?;
    let content = String::from_utf8(content)
        .map_err(|e| LinterError::config_parse(path, format!("invalid UTF-8: {}", e)))?;

    let config = Config::from_toml(&content, path)?;
    debug!(
        "Loaded config from {} ({} rules)",
        path.display(),
        config.rules.len()
    );
    Ok(config)
}

/// Fills unset per-rule severities with the global severity.
///
/// Set severities are never overwritten, so running this more than once has
/// no further effect.
pub fn normalize(config: &mut Config) {
    let Some(severity) = config.severity else {
        return;
    };
    for rule in config.rules.values_mut() {
        if rule.severity.is_none() {
            rule.severity = Some(severity);
        }
    }
}

/// Loads the configuration at `path`, or the default one when no path is
/// given, and normalizes it.
pub fn get_config(
    path: Option<&Path>,
    default_rules: &RuleRegistry,
) -> Result<Config, LinterError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => {
            debug!("No config file given, using defaults");
            default_config(default_rules)
        }
    };
    normalize(&mut config);
    Ok(config)
}
