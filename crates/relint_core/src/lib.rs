//! # relint_core
//!
//! Configuration resolution and invocation planning for relint.
//!
//! This crate provides:
//! - Rule and formatter catalogs
//! - Configuration loading and normalization
//! - Rule/formatter selection against the catalogs
//! - Input file discovery from include/exclude globs
//!
//! ## Example
//!
//! ```rust,ignore
//! use relint_core::{Catalogs, ExecutionPlan, PlanOptions};
//!
//! let options = PlanOptions {
//!     config_path: Some("relint.toml".into()),
//!     patterns: vec!["**/*.go".to_string()],
//!     ..PlanOptions::default()
//! };
//! let plan = ExecutionPlan::build(&options, &Catalogs::builtin())?;
//! println!("{} rules over {} files", plan.rules.len(), plan.files.len());
//! ```

mod config;
mod error;
mod failure;
pub mod file_finder;
pub mod formatter;
mod plan;
pub mod registry;
pub mod rule;
mod selector;

pub use config::{
    Config, RuleConfig, Severity, default_config, get_config, load_config, normalize,
};
pub use error::LinterError;
pub use failure::{Failure, Position};
pub use file_finder::{FileFinder, resolve_files};
pub use formatter::{DEFAULT_FORMATTER, Formatter, FormatterRegistry};
pub use plan::{Catalogs, ExecutionPlan, PlanOptions, PlanSummary};
pub use registry::{Named, Registry};
pub use rule::{Rule, RuleRegistry};
pub use selector::{select_formatter, select_rules};
