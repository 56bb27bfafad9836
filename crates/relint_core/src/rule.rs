//! Rule catalog.
//!
//! Rules are opaque analysis units. This crate only needs their names to
//! resolve a configuration; the analysis itself lives with the driver.

use std::sync::Arc;

use crate::registry::{Named, Registry};

/// A named analysis rule.
pub trait Rule: Named + Send + Sync {
    /// Short human-readable summary of what the rule checks.
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of rules keyed by name.
pub type RuleRegistry = Registry<dyn Rule>;

/// A rule shipped with relint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinRule {
    name: &'static str,
    description: &'static str,
}

impl BuiltinRule {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

impl Named for BuiltinRule {
    fn name(&self) -> &str {
        self.name
    }
}

impl Rule for BuiltinRule {
    fn description(&self) -> &str {
        self.description
    }
}

/// Rules enabled when no configuration file is given.
pub const DEFAULT_RULES: &[BuiltinRule] = &[
    BuiltinRule::new(
        "var-declaration",
        "Reduces redundancies around variable declaration",
    ),
    BuiltinRule::new(
        "package-comments",
        "Package commenting conventions",
    ),
    BuiltinRule::new("dot-imports", "Forbids `.` imports"),
    BuiltinRule::new("blank-imports", "Disallows blank imports"),
    BuiltinRule::new(
        "exported",
        "Naming and commenting conventions on exported symbols",
    ),
    BuiltinRule::new("var-naming", "Naming rules"),
    BuiltinRule::new(
        "indent-error-flow",
        "Prevents redundant else statements",
    ),
    BuiltinRule::new("if-return", "Redundant if when returning an error"),
    BuiltinRule::new("range", "Prevents redundant variables when iterating over a collection"),
    BuiltinRule::new(
        "errorf",
        "Should replace errors.New(fmt.Sprintf(...)) with fmt.Errorf(...)",
    ),
    BuiltinRule::new("error-naming", "Naming of error variables"),
    BuiltinRule::new("error-strings", "Conventions around error strings"),
    BuiltinRule::new("receiver-naming", "Conventions around the naming of receivers"),
    BuiltinRule::new(
        "increment-decrement",
        "Use i++ and i-- instead of i += 1 and i -= 1",
    ),
    BuiltinRule::new(
        "error-return",
        "The error return parameter should be last",
    ),
    BuiltinRule::new(
        "unexported-return",
        "Warns when a public return is from unexported type",
    ),
    BuiltinRule::new("time-naming", "Conventions around the naming of time variables"),
    BuiltinRule::new(
        "context-keys-type",
        "Disallows the usage of basic types in context.WithValue",
    ),
    BuiltinRule::new(
        "context-as-argument",
        "context.Context should be the first argument of a function",
    ),
];

/// Rules that must be enabled explicitly through configuration.
pub const OPT_IN_RULES: &[BuiltinRule] = &[
    BuiltinRule::new(
        "argument-limit",
        "Specifies the maximum number of arguments a function can receive",
    ),
    BuiltinRule::new("cyclomatic", "Sets restriction for maximum cyclomatic complexity"),
];

fn catalog<'a>(rules: impl IntoIterator<Item = &'a BuiltinRule>) -> RuleRegistry {
    Registry::new(
        rules
            .into_iter()
            .map(|rule| Arc::new(*rule) as Arc<dyn Rule>),
    )
}

impl Registry<dyn Rule> {
    /// Catalog of rules enabled by default.
    pub fn default_catalog() -> Self {
        catalog(DEFAULT_RULES)
    }

    /// Catalog of every known rule: the default rules plus the opt-in ones.
    pub fn full_catalog() -> Self {
        catalog(OPT_IN_RULES.iter().chain(DEFAULT_RULES))
    }
}
