//! Input file discovery from include/exclude glob patterns.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::LinterError;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

fn is_glob(s: &str) -> bool {
    s.contains(GLOB_META)
}

/// A single compiled pattern.
#[derive(Debug)]
struct Pattern {
    raw: String,
    /// `None` when the pattern has no metacharacters and names a path as is.
    matcher: Option<GlobMatcher>,
}

impl Pattern {
    fn new(raw: &str) -> Result<Self, LinterError> {
        let matcher = if is_glob(raw) {
            let glob = GlobBuilder::new(raw)
                .literal_separator(true)
                .build()
                .map_err(|e| LinterError::glob(raw, e.kind().to_string()))?;
            Some(glob.compile_matcher())
        } else {
            None
        };

        Ok(Self {
            raw: raw.to_string(),
            matcher,
        })
    }

    /// Expands the pattern against the file system.
    ///
    /// Matches are returned in walk order, which visits directory entries
    /// sorted by file name. Only regular files are returned. A missing base
    /// directory matches nothing; any other walk failure is an error.
    fn expand(&self) -> Result<Vec<String>, LinterError> {
        let Some(matcher) = &self.matcher else {
            return Ok(if Path::new(&self.raw).is_file() {
                vec![self.raw.clone()]
            } else {
                Vec::new()
            });
        };

        let components: Vec<&str> = self.raw.split('/').collect();
        let literal_len = components.iter().take_while(|c| !is_glob(c)).count();
        let base = match &components[..literal_len] {
            [] => String::new(),
            [""] => "/".to_string(),
            prefix => prefix.join("/"),
        };

        let root = if base.is_empty() { "." } else { base.as_str() };
        let mut walker = WalkDir::new(root).sort_by_file_name();
        if !self.raw.contains("**") {
            walker = walker.max_depth(components.len() - literal_len);
        }

        let mut matches = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e)
                    if e.depth() == 0
                        && e.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound) =>
                {
                    debug!("Base directory of pattern '{}' does not exist", self.raw);
                    return Ok(Vec::new());
                }
                Err(e) => return Err(LinterError::walk(&self.raw, e.to_string())),
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let lossy = path.to_string_lossy();
            let path: &str = &lossy;
            let candidate = if base.is_empty() {
                path.strip_prefix("./").unwrap_or(path)
            } else {
                path
            };

            if matcher.is_match(candidate) {
                matches.push(candidate.to_string());
            }
        }

        debug!("Pattern '{}' matched {} files", self.raw, matches.len());
        Ok(matches)
    }
}

/// Resolves the files to analyze from include and exclude patterns.
#[derive(Debug)]
pub struct FileFinder {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl FileFinder {
    /// Compiles the patterns.
    ///
    /// `exclude` holds zero or more patterns separated by a single space.
    /// Patterns cannot contain spaces themselves.
    pub fn new(include: &[String], exclude: &str) -> Result<Self, LinterError> {
        if include.is_empty() {
            return Err(LinterError::NoInputFiles);
        }

        let include = include
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let exclude = if exclude.is_empty() {
            Vec::new()
        } else {
            exclude
                .split(' ')
                .map(Pattern::new)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self { include, exclude })
    }

    /// Expands the include patterns in order and drops every path matched by
    /// an exclude pattern.
    ///
    /// Paths matched by more than one include pattern are kept once per
    /// match.
    pub fn discover_files(&self) -> Result<Vec<String>, LinterError> {
        let mut matches = Vec::new();
        for pattern in &self.include {
            matches.extend(pattern.expand()?);
        }

        if self.exclude.is_empty() {
            info!("Discovered {} files to lint", matches.len());
            return Ok(matches);
        }

        let mut excluded = HashSet::new();
        for pattern in &self.exclude {
            excluded.extend(pattern.expand()?);
        }
        let files: Vec<String> = matches
            .into_iter()
            .filter(|m| !excluded.contains(m))
            .collect();

        info!(
            "Discovered {} files to lint ({} excluded paths)",
            files.len(),
            excluded.len()
        );
        Ok(files)
    }
}

/// Expands `include` and removes the files matched by the space-separated
/// patterns in `exclude`.
pub fn resolve_files(include: &[String], exclude: &str) -> Result<Vec<String>, LinterError> {
    FileFinder::new(include, exclude)?.discover_files()
}
