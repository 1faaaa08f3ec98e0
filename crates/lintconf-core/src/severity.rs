//! Severity levels shared by every configuration layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity assigned to a rule by a configuration layer.
///
/// Variants are ordered from "unset" to strongest. [`Severity::Default`]
/// defers to the next layer, [`Severity::Suppress`] forces the rule off.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Unset; the next layer decides.
    #[default]
    Default,
    /// Rule is switched off.
    Suppress,
    /// Reported but not shown to the user.
    Hidden,
    /// Informational message.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Suppress,
        Self::Hidden,
        Self::Info,
        Self::Warning,
        Self::Error,
    ];

    /// Returns `true` for the "unset" sentinel.
    #[must_use]
    pub fn is_default(self) -> bool {
        self == Self::Default
    }

    /// Returns `true` if this severity switches the rule off.
    #[must_use]
    pub fn is_suppress(self) -> bool {
        self == Self::Suppress
    }

    /// Lowercase name as written in rule-set files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Suppress => "suppress",
            Self::Hidden => "hidden",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity `{value}`, expected: default, suppress, hidden, info, warning, error")]
pub struct UnknownSeverity {
    /// The rejected value.
    pub value: String,
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeverity {
                value: s.to_string(),
            })
    }
}
