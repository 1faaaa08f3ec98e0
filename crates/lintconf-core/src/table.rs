//! The effective rule table and its resolution queries.

use crate::code_style::CodeStyleDefaults;
use crate::overrides::DiagnosticOverrides;
use crate::precedence::Precedence;
use crate::rule_id::RuleId;
use crate::rule_set::RuleSet;
use crate::severity::Severity;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, warn};

static SHARED: OnceLock<RuleTable> = OnceLock::new();

/// Configuration layer a [`ResolutionIssue`] was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// The loaded rule set.
    RuleSet,
    /// Per-compilation diagnostic overrides.
    Overrides,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleSet => f.write_str("rule set"),
            Self::Overrides => f.write_str("diagnostic overrides"),
        }
    }
}

/// A non-fatal configuration problem.
///
/// Issues are logged and resolved conservatively; they never stop the rest
/// of the configuration from taking effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionIssue {
    /// A code-style rule was given a graded severity instead of
    /// `info` (on) or `suppress` (off). The rule resolves to disabled.
    #[error("{layer}: code style rule {id} has severity `{severity}`, expected `info` or `suppress`")]
    ContradictorySeverity {
        /// The offending rule.
        id: RuleId,
        /// The severity it was given.
        severity: Severity,
        /// Where the value came from.
        layer: Layer,
    },
}

/// Effective rule configuration, derived once from a [`RuleSet`] and the
/// compiled-in [`CodeStyleDefaults`].
///
/// The table is immutable after construction and can be shared freely
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    general: Severity,
    specific: BTreeMap<RuleId, Severity>,
    style_enabled: BTreeMap<RuleId, bool>,
    issues: Vec<ResolutionIssue>,
}

impl RuleTable {
    /// Builds the table.
    ///
    /// Code-style enablement is seeded from `defaults`, then overwritten by
    /// code-style entries of the rule set (`info` → on, `suppress` → off).
    /// Any other explicit severity on a code-style rule is recorded as a
    /// [`ResolutionIssue`] and turns the rule off.
    #[must_use]
    pub fn new(rule_set: &RuleSet, defaults: &CodeStyleDefaults) -> Self {
        let mut style_enabled: BTreeMap<RuleId, bool> = defaults
            .iter()
            .map(|(id, enabled)| (id.clone(), enabled))
            .collect();
        let mut issues = Vec::new();

        for (id, severity) in rule_set.specific() {
            if !id.is_code_style() {
                continue;
            }
            match severity {
                Severity::Info => {
                    style_enabled.insert(id.clone(), true);
                }
                Severity::Suppress => {
                    style_enabled.insert(id.clone(), false);
                }
                Severity::Default => {}
                other => {
                    let issue = ResolutionIssue::ContradictorySeverity {
                        id: id.clone(),
                        severity: *other,
                        layer: Layer::RuleSet,
                    };
                    warn!("{issue}");
                    issues.push(issue);
                    style_enabled.insert(id.clone(), false);
                }
            }
        }

        debug!(
            "Built rule table: general={}, {} specific rule(s), {} code style rule(s)",
            rule_set.general(),
            rule_set.specific().len(),
            style_enabled.len()
        );

        Self {
            general: rule_set.general(),
            specific: rule_set.specific().clone(),
            style_enabled,
            issues,
        }
    }

    /// Builds the table from a rule set and the built-in code-style defaults.
    #[must_use]
    pub fn with_builtin_defaults(rule_set: &RuleSet) -> Self {
        Self::new(rule_set, &CodeStyleDefaults::builtin())
    }

    /// Returns the process-wide table, building it with `init` on first use.
    ///
    /// Concurrent first calls are serialized; `init` runs at most once.
    pub fn shared_or_init(init: impl FnOnce() -> Self) -> &'static Self {
        SHARED.get_or_init(init)
    }

    /// Returns the process-wide table if it has been built.
    #[must_use]
    pub fn shared() -> Option<&'static Self> {
        SHARED.get()
    }

    /// Severity of a rule.
    ///
    /// 1. The rule's own entry, unless it is `default` (`suppress` is
    ///    returned as is).
    /// 2. The general option, unless it is `default` or `suppress`.
    /// 3. `fallback`.
    #[must_use]
    pub fn severity_of(&self, id: &str, fallback: Severity) -> Severity {
        Precedence::new()
            .then(|| self.specific_entry(id))
            .then(|| Some(self.general).filter(|s| !s.is_default() && !s.is_suppress()))
            .or(fallback)
    }

    /// Whether a code-style rule is enabled, with no compilation overrides.
    ///
    /// See [`RuleTable::is_enabled_with`].
    #[must_use]
    pub fn is_enabled(&self, id: &str, fallback: bool) -> bool {
        self.is_enabled_with(&DiagnosticOverrides::new(), id, fallback)
    }

    /// Whether a code-style rule is enabled.
    ///
    /// 1. An override of `info` enables the rule, `suppress` disables it.
    ///    Any other non-default override is a contradiction: it is logged and
    ///    the rule resolves to disabled.
    /// 2. The merged code-style table (rule set over built-in defaults).
    /// 3. `fallback`.
    ///
    /// A `default` override is treated as absent rather than as a
    /// contradiction, so it defers to the code-style table.
    #[must_use]
    pub fn is_enabled_with(&self, overrides: &DiagnosticOverrides, id: &str, fallback: bool) -> bool {
        Precedence::new()
            .then(|| {
                overrides
                    .get(id)
                    .filter(|s| !s.is_default())
                    .map(|severity| code_style_state(id, severity))
            })
            .then(|| self.style_enabled.get(id).copied())
            .or(fallback)
    }

    /// Whether a graded diagnostic is enabled.
    ///
    /// A non-default entry for the rule decides (`suppress` → off, anything
    /// else → on). A rule without an entry is off when the general option is
    /// `suppress`; otherwise `fallback` applies.
    #[must_use]
    pub fn is_diagnostic_enabled(&self, id: &str, fallback: bool) -> bool {
        Precedence::new()
            .then(|| self.specific_entry(id).map(|s| !s.is_suppress()))
            .then(|| (!self.specific.contains_key(id) && self.general.is_suppress()).then_some(false))
            .or(fallback)
    }

    /// The general option of the underlying rule set.
    #[must_use]
    pub fn general(&self) -> Severity {
        self.general
    }

    /// Merged code-style state of a rule, without overrides or fallback.
    #[must_use]
    pub fn style_enabled(&self, id: &str) -> Option<bool> {
        self.style_enabled.get(id).copied()
    }

    /// Problems found while building the table.
    #[must_use]
    pub fn issues(&self) -> &[ResolutionIssue] {
        &self.issues
    }

    /// Every rule id mentioned by the rule set or the code-style table.
    #[must_use]
    pub fn known_ids(&self) -> BTreeSet<&RuleId> {
        self.specific.keys().chain(self.style_enabled.keys()).collect()
    }

    fn specific_entry(&self, id: &str) -> Option<Severity> {
        self.specific.get(id).copied().filter(|s| !s.is_default())
    }
}

fn code_style_state(id: &str, severity: Severity) -> bool {
    match severity {
        Severity::Info => true,
        Severity::Suppress => false,
        other => {
            warn!(
                "{}: code style rule {id} has severity `{other}`, expected `info` or `suppress`",
                Layer::Overrides
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RuleId {
        RuleId::new(s).unwrap()
    }

    fn defaults() -> CodeStyleDefaults {
        [(id("STYLE01"), true), (id("STYLE02"), false)]
            .into_iter()
            .collect()
    }

    #[test]
    fn specific_entry_beats_general_and_fallback() {
        let rule_set = RuleSet::new()
            .with_general(Severity::Warning)
            .with_rule(id("CS1001"), Severity::Hidden);
        let table = RuleTable::new(&rule_set, &defaults());

        for fallback in Severity::ALL {
            assert_eq!(table.severity_of("CS1001", fallback), Severity::Hidden);
        }
    }

    #[test]
    fn specific_suppress_is_returned() {
        let rule_set = RuleSet::new()
            .with_general(Severity::Warning)
            .with_rule(id("CS1001"), Severity::Suppress);
        let table = RuleTable::new(&rule_set, &defaults());

        assert_eq!(table.severity_of("CS1001", Severity::Error), Severity::Suppress);
        assert_eq!(table.severity_of("CS9999", Severity::Error), Severity::Warning);
    }

    #[test]
    fn default_entry_defers_to_general() {
        let rule_set = RuleSet::new()
            .with_general(Severity::Info)
            .with_rule(id("CS1001"), Severity::Default);
        let table = RuleTable::new(&rule_set, &defaults());

        assert_eq!(table.severity_of("CS1001", Severity::Error), Severity::Info);
    }

    #[test]
    fn general_suppress_falls_back_to_default_severity() {
        let rule_set = RuleSet::new().with_general(Severity::Suppress);
        let table = RuleTable::new(&rule_set, &defaults());

        assert_eq!(table.severity_of("CS1001", Severity::Error), Severity::Error);
    }

    #[test]
    fn style_table_seeded_from_defaults() {
        let table = RuleTable::new(&RuleSet::new(), &defaults());
        assert!(table.is_enabled("STYLE01", false));
        assert!(!table.is_enabled("STYLE02", true));
        assert!(table.is_enabled("STYLE99", true));
        assert!(!table.is_enabled("STYLE99", false));
    }

    #[test]
    fn rule_set_overwrites_style_defaults() {
        let rule_set = RuleSet::new()
            .with_rule(id("STYLE01"), Severity::Suppress)
            .with_rule(id("STYLE02"), Severity::Info);
        let table = RuleTable::new(&rule_set, &defaults());

        assert_eq!(table.style_enabled("STYLE01"), Some(false));
        assert_eq!(table.style_enabled("STYLE02"), Some(true));
        assert!(table.issues().is_empty());
    }

    #[test]
    fn graded_style_severity_is_an_issue() {
        let rule_set = RuleSet::new().with_rule(id("STYLE02"), Severity::Error);
        let table = RuleTable::new(&rule_set, &defaults());

        assert_eq!(table.style_enabled("STYLE02"), Some(false));
        assert_eq!(
            table.issues(),
            &[ResolutionIssue::ContradictorySeverity {
                id: id("STYLE02"),
                severity: Severity::Error,
                layer: Layer::RuleSet,
            }]
        );
    }

    #[test]
    fn graded_severity_disables_style_rule_that_defaults_on() {
        let rule_set = RuleSet::new().with_rule(id("STYLE01"), Severity::Error);
        let table = RuleTable::new(&rule_set, &defaults());

        assert_eq!(table.style_enabled("STYLE01"), Some(false));
        assert!(!table.is_enabled("STYLE01", true));
        assert_eq!(table.issues().len(), 1);
    }

    #[test]
    fn non_style_ids_never_enter_style_table() {
        let rule_set = RuleSet::new().with_rule(id("CS1001"), Severity::Info);
        let table = RuleTable::new(&rule_set, &defaults());
        assert_eq!(table.style_enabled("CS1001"), None);
    }

    #[test]
    fn overrides_take_precedence_over_style_table() {
        let table = RuleTable::new(&RuleSet::new(), &defaults());
        let overrides = DiagnosticOverrides::new()
            .with(id("STYLE01"), Severity::Suppress)
            .with(id("STYLE02"), Severity::Info);

        assert!(!table.is_enabled_with(&overrides, "STYLE01", true));
        assert!(table.is_enabled_with(&overrides, "STYLE02", false));
    }

    #[test]
    fn contradictory_override_resolves_disabled() {
        let table = RuleTable::new(&RuleSet::new(), &defaults());
        let overrides = DiagnosticOverrides::new().with(id("STYLE01"), Severity::Warning);

        assert!(!table.is_enabled_with(&overrides, "STYLE01", true));
    }

    #[test]
    fn default_override_defers_to_style_table() {
        let table = RuleTable::new(&RuleSet::new(), &defaults());
        let overrides = DiagnosticOverrides::new().with(id("STYLE01"), Severity::Default);

        assert!(table.is_enabled_with(&overrides, "STYLE01", false));
    }

    #[test]
    fn diagnostic_enablement_honours_catch_all_suppress() {
        let rule_set = RuleSet::new()
            .with_general(Severity::Suppress)
            .with_rule(id("CS1001"), Severity::Warning)
            .with_rule(id("CS1002"), Severity::Default);
        let table = RuleTable::new(&rule_set, &defaults());

        assert!(table.is_diagnostic_enabled("CS1001", false));
        assert!(!table.is_diagnostic_enabled("CS9999", true));
        assert!(table.is_diagnostic_enabled("CS1002", true));
    }

    #[test]
    fn diagnostic_enablement_specific_suppress() {
        let rule_set = RuleSet::new().with_rule(id("CS1001"), Severity::Suppress);
        let table = RuleTable::new(&rule_set, &defaults());

        assert!(!table.is_diagnostic_enabled("CS1001", true));
        assert!(table.is_diagnostic_enabled("CS9999", true));
    }

    #[test]
    fn known_ids_union_both_tables() {
        let rule_set = RuleSet::new()
            .with_rule(id("CS1001"), Severity::Error)
            .with_rule(id("STYLE01"), Severity::Info);
        let table = RuleTable::new(&rule_set, &defaults());

        let ids: Vec<&str> = table.known_ids().into_iter().map(RuleId::as_str).collect();
        assert_eq!(ids, ["CS1001", "STYLE01", "STYLE02"]);
    }

    #[test]
    fn issue_message_names_rule_and_layer() {
        let issue = ResolutionIssue::ContradictorySeverity {
            id: id("STYLE03"),
            severity: Severity::Warning,
            layer: Layer::RuleSet,
        };
        insta::assert_snapshot!(
            issue.to_string(),
            @"rule set: code style rule STYLE03 has severity `warning`, expected `info` or `suppress`"
        );
    }
}
