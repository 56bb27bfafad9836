//! Linter error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving an invocation.
///
/// Every variant is fatal: callers propagate it to the entry point, which
/// decides how to terminate.
#[derive(Debug, Error)]
pub enum LinterError {
    /// The configuration file could not be read.
    #[error("cannot read the config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the config shape.
    #[error("cannot parse the config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A configured rule is not in the rule catalog.
    #[error("cannot find rule: {0}")]
    UnknownRule(String),

    /// The requested formatter is not in the formatter catalog.
    #[error("unknown formatter {0}")]
    UnknownFormatter(String),

    /// No include patterns were given.
    #[error("no input files specified")]
    NoInputFiles,

    /// An include or exclude pattern is not a valid glob.
    #[error("invalid glob pattern '{pattern}': {message}")]
    GlobPattern { pattern: String, message: String },

    /// Walking the file system for a pattern failed.
    #[error("cannot expand pattern '{pattern}': {message}")]
    FileWalk { pattern: String, message: String },

    /// A formatter failed to render its output.
    #[error("Format error: {0}")]
    Format(String),
}

impl LinterError {
    /// Creates a config read error.
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a config parse error.
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a glob pattern error.
    pub fn glob(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GlobPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates a file walk error.
    pub fn walk(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileWalk {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

impl From<std::fmt::Error> for LinterError {
    fn from(e: std::fmt::Error) -> Self {
        Self::format(e.to_string())
    }
}
