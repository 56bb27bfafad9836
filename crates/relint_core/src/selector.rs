//! Resolution of configured names against the catalogs.

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::LinterError;
use crate::formatter::{DEFAULT_FORMATTER, Formatter, FormatterRegistry};
use crate::rule::{Rule, RuleRegistry};

/// Looks up every rule named in `config` in `registry`.
///
/// Rules are returned sorted by name. The first unknown name aborts the
/// selection; a partial rule set is never returned.
pub fn select_rules(
    config: &Config,
    registry: &RuleRegistry,
) -> Result<Vec<Arc<dyn Rule>>, LinterError> {
    let rules = config
        .rules
        .keys()
        .map(|name| {
            registry
                .get(name)
                .ok_or_else(|| LinterError::UnknownRule(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Selected {} rules", rules.len());
    Ok(rules)
}

/// Looks up the formatter called `name`, or the `cli` formatter when no name
/// (or an empty one) is given.
pub fn select_formatter(
    name: Option<&str>,
    registry: &FormatterRegistry,
) -> Result<Arc<dyn Formatter>, LinterError> {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_FORMATTER);
    let formatter = registry
        .get(name)
        .ok_or_else(|| LinterError::UnknownFormatter(name.to_string()))?;

    debug!("Selected formatter '{}'", name);
    Ok(formatter)
}
