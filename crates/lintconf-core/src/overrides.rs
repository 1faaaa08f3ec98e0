//! Compiler-level per-rule severity overrides.

use crate::rule_id::RuleId;
use crate::severity::Severity;
use std::collections::BTreeMap;

/// Per-rule severities supplied by one compilation unit.
///
/// These sit above the rule set when deciding whether a code-style rule is
/// enabled. Each compilation may carry its own overrides, so they are passed
/// to queries rather than stored in the [`crate::RuleTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticOverrides {
    specific: BTreeMap<RuleId, Severity>,
}

impl DiagnosticOverrides {
    /// Creates an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override for one rule, replacing any previous value.
    #[must_use]
    pub fn with(mut self, id: RuleId, severity: Severity) -> Self {
        self.insert(id, severity);
        self
    }

    /// Sets the override for one rule, replacing any previous value.
    pub fn insert(&mut self, id: RuleId, severity: Severity) {
        self.specific.insert(id, severity);
    }

    /// Returns the override for a rule, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Severity> {
        self.specific.get(id).copied()
    }

    /// Returns `true` if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specific.is_empty()
    }
}

impl FromIterator<(RuleId, Severity)> for DiagnosticOverrides {
    fn from_iter<I: IntoIterator<Item = (RuleId, Severity)>>(iter: I) -> Self {
        Self {
            specific: iter.into_iter().collect(),
        }
    }
}
