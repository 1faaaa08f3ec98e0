//! Rule-set file loading.
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! RuleSetDto
//!   ↓ validate + convert
//! RuleSetLayer
//!   ↓ merge, last loaded wins
//! RuleSet
//! ```

use crate::rule_id::{InvalidRuleId, RuleId};
use crate::rule_set::{RuleSet, RuleSetLayer};
use crate::severity::{Severity, UnknownSeverity};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw TOML representation of a rule-set file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleSetDto {
    #[serde(default)]
    general: Option<String>,
    #[serde(default)]
    rules: BTreeMap<String, String>,
}

/// Errors while loading rule-set files.
///
/// Any of these makes the effective rule table impossible to build.
#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    /// The file could not be read.
    #[error("failed to read rule set {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not a structurally valid rule set.
    #[error("malformed rule set {origin}: {message}")]
    Malformed {
        /// File path, or `<inline>` for in-memory content.
        origin: String,
        /// Parser message.
        message: String,
    },

    /// A severity string is not recognized.
    #[error("malformed rule set {origin}: {context}: {source}")]
    UnknownSeverity {
        /// File path, or `<inline>`.
        origin: String,
        /// Key that carried the value (e.g. `rules.CS1001`).
        context: String,
        /// Underlying error.
        source: UnknownSeverity,
    },

    /// A rule id is not valid.
    #[error("malformed rule set {origin}: {source}")]
    InvalidRuleId {
        /// File path, or `<inline>`.
        origin: String,
        /// Underlying error.
        source: InvalidRuleId,
    },
}

const INLINE_ORIGIN: &str = "<inline>";

/// Parses one rule-set layer from TOML text.
///
/// # Errors
///
/// Returns [`RuleSetError`] if the TOML is invalid, a severity is unknown or
/// a rule id is malformed.
pub fn parse_layer(content: &str) -> Result<RuleSetLayer, RuleSetError> {
    parse_layer_with_origin(content, INLINE_ORIGIN)
}

/// Reads and parses one rule-set file.
///
/// # Errors
///
/// Returns [`RuleSetError::Io`] if the file cannot be read, or any parse
/// error from [`parse_layer`].
pub fn load_layer(path: &Path) -> Result<RuleSetLayer, RuleSetError> {
    let content = std::fs::read_to_string(path).map_err(|e| RuleSetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let layer = parse_layer_with_origin(&content, &path.display().to_string())?;
    debug!(
        "Loaded rule set {} ({} rule(s))",
        path.display(),
        layer.specific.len()
    );
    Ok(layer)
}

/// Loads every file in order and merges them, later files winning per key.
///
/// An empty slice yields an empty [`RuleSet`].
///
/// # Errors
///
/// Returns the first error encountered; nothing is merged in that case.
pub fn load_rule_set<P: AsRef<Path>>(paths: &[P]) -> Result<RuleSet, RuleSetError> {
    paths.iter().try_fold(RuleSet::new(), |merged, path| {
        Ok(merged.merge(load_layer(path.as_ref())?))
    })
}

fn parse_layer_with_origin(content: &str, origin: &str) -> Result<RuleSetLayer, RuleSetError> {
    let dto: RuleSetDto = toml::from_str(content).map_err(|e| RuleSetError::Malformed {
        origin: origin.to_string(),
        message: e.message().to_string(),
    })?;
    convert(dto, origin)
}

fn convert(dto: RuleSetDto, origin: &str) -> Result<RuleSetLayer, RuleSetError> {
    let general = dto
        .general
        .map(|value| parse_severity(&value, "general", origin))
        .transpose()?;

    let specific = dto
        .rules
        .into_iter()
        .map(|(key, value)| {
            let id = RuleId::new(&key).map_err(|e| RuleSetError::InvalidRuleId {
                origin: origin.to_string(),
                source: e,
            })?;
            let severity = parse_severity(&value, &format!("rules.{key}"), origin)?;
            Ok((id, severity))
        })
        .collect::<Result<BTreeMap<_, _>, RuleSetError>>()?;

    Ok(RuleSetLayer { general, specific })
}

fn parse_severity(value: &str, context: &str, origin: &str) -> Result<Severity, RuleSetError> {
    value
        .parse::<Severity>()
        .map_err(|e| RuleSetError::UnknownSeverity {
            origin: origin.to_string(),
            context: context.to_string(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_general_and_rules() {
        let layer = parse_layer(
            r#"
general = "warning"

[rules]
CS1001 = "suppress"
STYLE01 = "Info"
"#,
        )
        .unwrap();

        assert_eq!(layer.general, Some(Severity::Warning));
        assert_eq!(layer.specific.len(), 2);
        assert_eq!(layer.specific["CS1001"], Severity::Suppress);
        assert_eq!(layer.specific["STYLE01"], Severity::Info);
    }

    #[test]
    fn empty_file_is_empty_layer() {
        assert_eq!(parse_layer("").unwrap(), RuleSetLayer::default());
    }

    #[test]
    fn unknown_severity_is_malformed() {
        let err = parse_layer("[rules]\nCS1001 = \"fatal\"\n").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"malformed rule set <inline>: rules.CS1001: unknown severity `fatal`, expected: default, suppress, hidden, info, warning, error"
        );
    }

    #[test]
    fn unknown_section_is_malformed() {
        let err = parse_layer("[severities]\nCS1001 = \"error\"\n").unwrap_err();
        assert!(matches!(err, RuleSetError::Malformed { .. }));
    }

    #[test]
    fn duplicate_keys_are_malformed() {
        let err = parse_layer("[rules]\nCS1001 = \"error\"\nCS1001 = \"info\"\n").unwrap_err();
        assert!(matches!(err, RuleSetError::Malformed { .. }));
    }

    #[test]
    fn whitespace_rule_id_is_rejected() {
        let err = parse_layer("[rules]\n\"CS 1001\" = \"error\"\n").unwrap_err();
        assert!(matches!(err, RuleSetError::InvalidRuleId { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_layer(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RuleSetError::Io { .. }));
    }

    #[test]
    fn files_merge_last_loaded_wins() {
        let tmp = TempDir::new().unwrap();
        let first = tmp.path().join("first.toml");
        let second = tmp.path().join("second.toml");
        fs::write(
            &first,
            "general = \"warning\"\n[rules]\nCS1001 = \"error\"\nCS1002 = \"info\"\n",
        )
        .unwrap();
        fs::write(&second, "[rules]\nCS1001 = \"suppress\"\n").unwrap();

        let rule_set = load_rule_set(&[first, second]).unwrap();
        assert_eq!(rule_set.general(), Severity::Warning);
        assert_eq!(rule_set.specific()["CS1001"], Severity::Suppress);
        assert_eq!(rule_set.specific()["CS1002"], Severity::Info);
    }

    #[test]
    fn no_files_gives_empty_rule_set() {
        let paths: [PathBuf; 0] = [];
        assert_eq!(load_rule_set(&paths).unwrap(), RuleSet::new());
    }
}
