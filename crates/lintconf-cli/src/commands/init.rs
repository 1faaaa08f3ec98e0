//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config_resolver::PROJECT_RULESET_NAMES;

const DEFAULT_RULESET: &str = r#"# lintconf rule set
#
# Severities: default, suppress, hidden, info, warning, error.
# Later files override earlier ones: ~/.lintconf/ruleset.toml, then this
# file, then every --ruleset path.

# Severity for every rule without its own entry.
# "suppress" here turns off rules that are not listed below.
general = "warning"

[rules]
# Graded diagnostics
# CS1001 = "error"
# CS2002 = "suppress"

# Code style rules are on ("info") or off ("suppress")
STYLE01 = "info"
# STYLE04 = "info"
"#;

/// Runs the init command.
pub fn run(project_dir: &Path, force: bool) -> Result<()> {
    let path = write_default(project_dir, force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to configure rules", path.display());
    println!("  2. Run: lintconf rules");

    Ok(())
}

fn write_default(project_dir: &Path, force: bool) -> Result<PathBuf> {
    let path = project_dir.join(PROJECT_RULESET_NAMES[0]);

    if path.exists() && !force {
        bail!(
            "Rule set already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, DEFAULT_RULESET)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
