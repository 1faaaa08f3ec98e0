//! Rules command implementation.

use anyhow::{Context, Result};
use lintconf_core::loader::load_rule_set;
use lintconf_core::{DiagnosticOverrides, RuleId, RuleTable, Severity, CODE_STYLE_PREFIX};
use lintconf_options::{
    help_name, names, parse_enum, OptionParseError, OptionParser, PropertiesParser, Provider,
};
use serde::Serialize;
use std::path::Path;

use crate::config_resolver::RuleSetSource;
use crate::OutputFormat;

/// How one rule resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    /// Rule id as queried.
    pub id: String,
    /// Effective severity.
    pub severity: Severity,
    /// On/off state of a code-style rule; `None` for graded rules.
    pub enabled: Option<bool>,
    /// Whether the rule would report at all.
    pub diagnostic_enabled: bool,
}

/// Output of the rules command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesReport {
    /// Loaded rule-set files, lowest precedence first.
    pub sources: Vec<String>,
    /// General option of the merged rule set.
    pub general: Severity,
    /// Per-rule resolution.
    pub rules: Vec<RuleReport>,
    /// Problems found while building the table.
    pub issues: Vec<String>,
}

/// Runs the rules command.
pub fn run(
    sources: &[RuleSetSource],
    ids: &[String],
    default_severity: &str,
    overrides: &[String],
    format: OutputFormat,
) -> Result<()> {
    let fallback = super::exit_on_option_error(parse_enum(
        default_severity,
        names::DEFAULT_SEVERITY,
        Provider::<Severity>::NoProvider,
    ));
    let overrides = super::exit_on_option_error(parse_overrides(overrides));

    for source in sources {
        tracing::info!("Using {source}");
    }
    let paths: Vec<&Path> = sources.iter().map(RuleSetSource::path).collect();
    let rule_set = load_rule_set(&paths).context("Failed to load rule set")?;

    let table = RuleTable::shared_or_init(|| RuleTable::with_builtin_defaults(&rule_set));
    tracing::debug!("Rule table has {} known ids", table.known_ids().len());

    let report = build_report(table, sources, ids, fallback, &overrides);
    super::output::print_rules(&report, format)
}

/// Parses `ID=SEV` override tokens.
fn parse_overrides(tokens: &[String]) -> Result<DiagnosticOverrides, OptionParseError> {
    let properties = PropertiesParser::new(names::OVERRIDE).parse(tokens)?;
    let mut overrides = DiagnosticOverrides::new();
    for (key, value) in properties {
        let id = RuleId::new(&key).map_err(|_| OptionParseError::MalformedProperty {
            option: help_name(names::OVERRIDE),
            token: format!("{key}={value}"),
        })?;
        let severity = parse_enum(&value, names::OVERRIDE, Provider::NoProvider)?;
        overrides.insert(id, severity);
    }
    Ok(overrides)
}

fn build_report(
    table: &RuleTable,
    sources: &[RuleSetSource],
    ids: &[String],
    fallback: Severity,
    overrides: &DiagnosticOverrides,
) -> RulesReport {
    let ids: Vec<String> = if ids.is_empty() {
        table.known_ids().into_iter().map(ToString::to_string).collect()
    } else {
        ids.to_vec()
    };

    let rules = ids
        .into_iter()
        .map(|id| {
            let enabled = id
                .starts_with(CODE_STYLE_PREFIX)
                .then(|| table.is_enabled_with(overrides, &id, false));
            RuleReport {
                severity: table.severity_of(&id, fallback),
                enabled,
                diagnostic_enabled: table.is_diagnostic_enabled(&id, true),
                id,
            }
        })
        .collect();

    RulesReport {
        sources: sources.iter().map(ToString::to_string).collect(),
        general: table.general(),
        rules,
        issues: table.issues().iter().map(ToString::to_string).collect(),
    }
}
