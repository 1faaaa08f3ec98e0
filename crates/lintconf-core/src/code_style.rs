//! Compiled-in code-style rules and their default enablement.

use crate::rule_id::RuleId;
use std::collections::BTreeMap;

/// Prefix shared by every code-style rule id.
pub const CODE_STYLE_PREFIX: &str = "STYLE";

/// A built-in code-style rule.
///
/// Code-style rules are binary: they are either on or off and never carry a
/// graded severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeStyleDescriptor {
    /// Rule id (always starts with [`CODE_STYLE_PREFIX`]).
    pub id: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// Whether the rule is on when no configuration mentions it.
    pub enabled_by_default: bool,
}

/// Every code-style rule shipped with lintconf.
pub const CODE_STYLE_RULES: &[CodeStyleDescriptor] = &[
    CodeStyleDescriptor {
        id: "STYLE01",
        title: "Parenthesize condition of conditional expression",
        enabled_by_default: true,
    },
    CodeStyleDescriptor {
        id: "STYLE02",
        title: "Add blank line between declarations",
        enabled_by_default: true,
    },
    CodeStyleDescriptor {
        id: "STYLE03",
        title: "Remove trailing whitespace",
        enabled_by_default: true,
    },
    CodeStyleDescriptor {
        id: "STYLE04",
        title: "Use explicit type instead of var",
        enabled_by_default: false,
    },
    CodeStyleDescriptor {
        id: "STYLE05",
        title: "Put operator at the start of a wrapped line",
        enabled_by_default: false,
    },
    CodeStyleDescriptor {
        id: "STYLE06",
        title: "Use block body for methods",
        enabled_by_default: false,
    },
];

/// Default enabled/disabled state for code-style rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeStyleDefaults {
    enabled: BTreeMap<RuleId, bool>,
}

impl CodeStyleDefaults {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from [`CODE_STYLE_RULES`].
    #[must_use]
    pub fn builtin() -> Self {
        CODE_STYLE_RULES
            .iter()
            .filter_map(|d| RuleId::new(d.id).ok().map(|id| (id, d.enabled_by_default)))
            .collect()
    }

    /// Returns the default state of a rule, if it is known.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<bool> {
        self.enabled.get(id).copied()
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Returns `true` if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Iterates over `(id, enabled)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleId, bool)> {
        self.enabled.iter().map(|(id, enabled)| (id, *enabled))
    }
}

impl FromIterator<(RuleId, bool)> for CodeStyleDefaults {
    fn from_iter<I: IntoIterator<Item = (RuleId, bool)>>(iter: I) -> Self {
        Self {
            enabled: iter.into_iter().collect(),
        }
    }
}
