//! Externally supplied rule sets.

use crate::rule_id::RuleId;
use crate::severity::Severity;
use std::collections::BTreeMap;

/// A catch-all severity plus per-rule severities.
///
/// Produced by [`crate::loader`] from one or more rule-set files and treated
/// as immutable once the [`crate::RuleTable`] has been built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    general: Severity,
    specific: BTreeMap<RuleId, Severity>,
}

impl RuleSet {
    /// Creates an empty rule set (general option `default`, no entries).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the general option.
    #[must_use]
    pub fn with_general(mut self, general: Severity) -> Self {
        self.general = general;
        self
    }

    /// Sets the severity of one rule, replacing any previous entry.
    #[must_use]
    pub fn with_rule(mut self, id: RuleId, severity: Severity) -> Self {
        self.specific.insert(id, severity);
        self
    }

    /// The severity for rules without a specific entry.
    #[must_use]
    pub fn general(&self) -> Severity {
        self.general
    }

    /// Per-rule severities.
    #[must_use]
    pub fn specific(&self) -> &BTreeMap<RuleId, Severity> {
        &self.specific
    }

    /// Layers `later` on top of `self`.
    ///
    /// Specific entries of `later` replace entries with the same id. The
    /// general option of `later` wins only when `later` set it explicitly.
    #[must_use]
    pub fn merge(mut self, later: RuleSetLayer) -> Self {
        if let Some(general) = later.general {
            self.general = general;
        }
        self.specific.extend(later.specific);
        self
    }
}

/// One loaded rule-set file before merging.
///
/// Unlike [`RuleSet`], the general option is optional so a file that does
/// not mention it leaves the value of earlier layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSetLayer {
    /// General option, if the file sets one.
    pub general: Option<Severity>,
    /// Per-rule severities.
    pub specific: BTreeMap<RuleId, Severity>,
}

impl From<RuleSetLayer> for RuleSet {
    fn from(layer: RuleSetLayer) -> Self {
        Self::new().merge(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RuleId {
        RuleId::new(s).unwrap()
    }

    #[test]
    fn later_layer_wins_per_key() {
        let base = RuleSet::new()
            .with_rule(id("CS1001"), Severity::Warning)
            .with_rule(id("CS1002"), Severity::Error);
        let later = RuleSetLayer {
            general: None,
            specific: BTreeMap::from([(id("CS1001"), Severity::Suppress)]),
        };

        let merged = base.merge(later);
        assert_eq!(merged.specific()[&id("CS1001")], Severity::Suppress);
        assert_eq!(merged.specific()[&id("CS1002")], Severity::Error);
    }

    #[test]
    fn general_only_replaced_when_set() {
        let base = RuleSet::new().with_general(Severity::Warning);
        let merged = base.clone().merge(RuleSetLayer::default());
        assert_eq!(merged.general(), Severity::Warning);

        let merged = base.merge(RuleSetLayer {
            general: Some(Severity::Error),
            specific: BTreeMap::new(),
        });
        assert_eq!(merged.general(), Severity::Error);
    }
}
