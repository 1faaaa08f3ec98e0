//! Rule-set file discovery.
//!
//! Every file found is loaded; later sources override earlier ones per key.
//! Sources are returned lowest precedence first:
//!
//! 1. `~/.lintconf/ruleset.toml` (global)
//! 2. `{project}/lintconf.toml` or `.lintconf.toml`
//! 3. every `--ruleset` path, in the order given

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a rule-set file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSetSource {
    /// Loaded from the global config directory (`~/.lintconf/`).
    Global(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Given via `--ruleset`.
    Explicit(PathBuf),
}

impl RuleSetSource {
    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Global(p) | Self::Project(p) | Self::Explicit(p) => p,
        }
    }
}

impl fmt::Display for RuleSetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Global(_) => "global",
            Self::Project(_) => "project",
            Self::Explicit(_) => "explicit",
        };
        write!(f, "{kind} rule set {}", self.path().display())
    }
}

/// Project-level rule-set file names, checked in order.
pub const PROJECT_RULESET_NAMES: &[&str] = &["lintconf.toml", ".lintconf.toml"];

/// Rule-set file name within the global config directory.
const GLOBAL_RULESET_NAME: &str = "ruleset.toml";

/// Collects the rule-set files to load, lowest precedence first.
///
/// See module-level docs for the order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: &[PathBuf]) -> Vec<RuleSetSource> {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    project_dir: &Path,
    explicit: &[PathBuf],
    global_dir: Option<PathBuf>,
) -> Vec<RuleSetSource> {
    let mut sources = Vec::new();

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_RULESET_NAME);
        if candidate.exists() {
            tracing::debug!("Found global rule set: {}", candidate.display());
            sources.push(RuleSetSource::Global(candidate));
        }
    }

    if let Some(candidate) = PROJECT_RULESET_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists())
    {
        tracing::debug!("Found project rule set: {}", candidate.display());
        sources.push(RuleSetSource::Project(candidate));
    }

    // Explicit paths are trusted as-is; a missing file fails at load time.
    sources.extend(explicit.iter().cloned().map(RuleSetSource::Explicit));

    sources
}

/// Returns the global config directory path.
///
/// Resolution: `$LINTCONF_CONFIG_DIR` > `~/.lintconf/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LINTCONF_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".lintconf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn nothing_found_gives_empty_list() {
        let project = TempDir::new().unwrap();
        assert!(resolve_inner(project.path(), &[], None).is_empty());
    }

    #[test]
    fn project_lintconf_toml_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("lintconf.toml"), "").unwrap();

        let sources = resolve_inner(tmp.path(), &[], None);
        assert_eq!(
            sources,
            [RuleSetSource::Project(tmp.path().join("lintconf.toml"))]
        );
    }

    #[test]
    fn dot_prefixed_name_is_second_choice() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".lintconf.toml"), "").unwrap();
        assert_eq!(
            resolve_inner(tmp.path(), &[], None),
            [RuleSetSource::Project(tmp.path().join(".lintconf.toml"))]
        );

        fs::write(tmp.path().join("lintconf.toml"), "").unwrap();
        assert_eq!(
            resolve_inner(tmp.path(), &[], None),
            [RuleSetSource::Project(tmp.path().join("lintconf.toml"))]
        );
    }

    #[test]
    fn all_layers_in_precedence_order() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("lintconf.toml"), "").unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("ruleset.toml"), "").unwrap();
        let explicit = vec![PathBuf::from("/a.toml"), PathBuf::from("/b.toml")];

        let sources = resolve_inner(project.path(), &explicit, Some(global.path().to_path_buf()));
        assert_eq!(
            sources,
            [
                RuleSetSource::Global(global.path().join("ruleset.toml")),
                RuleSetSource::Project(project.path().join("lintconf.toml")),
                RuleSetSource::Explicit(PathBuf::from("/a.toml")),
                RuleSetSource::Explicit(PathBuf::from("/b.toml")),
            ]
        );
    }

    #[test]
    fn explicit_does_not_check_existence() {
        let project = TempDir::new().unwrap();
        let explicit = [PathBuf::from("/nonexistent.toml")];
        assert_eq!(
            resolve_inner(project.path(), &explicit, None),
            [RuleSetSource::Explicit(PathBuf::from("/nonexistent.toml"))]
        );
    }

    #[test]
    fn global_dir_without_file_is_skipped() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        assert!(resolve_inner(project.path(), &[], Some(global.path().to_path_buf())).is_empty());
    }

    #[test]
    fn display_names_the_layer() {
        let source = RuleSetSource::Global(PathBuf::from("/g/ruleset.toml"));
        assert_eq!(source.to_string(), "global rule set /g/ruleset.toml");
        assert_eq!(source.path(), Path::new("/g/ruleset.toml"));
    }
}
