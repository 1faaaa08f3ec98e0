//! Path options.

use crate::error::{help_name, OptionParseError};
use crate::parser::OptionParser;
use std::path::{Component, Path, PathBuf};

/// Turns user-supplied paths into absolute, lexically normalized paths.
///
/// Relative paths are joined to the base directory, which defaults to the
/// process's current directory at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    base: Option<PathBuf>,
}

impl PathResolver {
    /// Resolves relative paths against the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative paths against `base`.
    #[must_use]
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Makes one path given to the option named `option_name` absolute.
    ///
    /// # Errors
    ///
    /// Returns [`OptionParseError::InvalidPath`] for an empty path, a path
    /// containing NUL, or when the current directory cannot be determined.
    pub fn resolve(&self, option_name: &str, path: &str) -> Result<PathBuf, OptionParseError> {
        let invalid = |message: String| OptionParseError::InvalidPath {
            option: help_name(option_name),
            path: path.to_string(),
            message,
        };

        if path.is_empty() {
            return Err(invalid("path is empty".to_string()));
        }
        if path.contains('\0') {
            return Err(invalid("path contains a NUL character".to_string()));
        }

        let candidate = Path::new(path);
        if candidate.is_absolute() {
            return Ok(normalize(candidate));
        }

        let base = match &self.base {
            Some(base) => base.clone(),
            None => std::env::current_dir().map_err(|e| invalid(e.to_string()))?,
        };
        Ok(normalize(&base.join(candidate)))
    }
}

/// Removes `.` components and folds `..` into the preceding component.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Parser for options that take a list of paths.
#[derive(Debug, Clone)]
pub struct PathsParser {
    option_name: &'static str,
    resolver: PathResolver,
}

impl PathsParser {
    /// Creates a parser for the named option.
    #[must_use]
    pub fn new(option_name: &'static str, resolver: PathResolver) -> Self {
        Self {
            option_name,
            resolver,
        }
    }
}

impl OptionParser for PathsParser {
    type Bundle = Vec<PathBuf>;

    fn option_name(&self) -> &str {
        self.option_name
    }

    fn default_bundle(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Vec<PathBuf>, OptionParseError> {
        tokens
            .iter()
            .map(|token| self.resolver.resolve(self.option_name, token))
            .collect()
    }
}
