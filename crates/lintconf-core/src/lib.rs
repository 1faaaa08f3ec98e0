//! # lintconf-core
//!
//! Layered rule configuration for code-analysis tools.
//!
//! Three sources decide how a rule behaves:
//!
//! - a [`RuleSet`] loaded from disk (general severity plus per-rule entries),
//! - [`DiagnosticOverrides`] supplied per compilation,
//! - compiled-in [`CodeStyleDefaults`] for binary code-style rules.
//!
//! [`RuleTable`] merges them once and answers two questions for any rule id:
//! which [`Severity`] applies, and whether a code-style rule is enabled.
//!
//! ## Example
//!
//! ```
//! use lintconf_core::{loader, RuleSet, RuleTable, Severity};
//!
//! let layer = loader::parse_layer(r#"
//! general = "warning"
//!
//! [rules]
//! CS1001 = "suppress"
//! "#)?;
//! let rule_set = RuleSet::from(layer);
//! let table = RuleTable::with_builtin_defaults(&rule_set);
//!
//! assert_eq!(table.severity_of("CS1001", Severity::Error), Severity::Suppress);
//! assert_eq!(table.severity_of("CS9999", Severity::Error), Severity::Warning);
//! # Ok::<(), lintconf_core::RuleSetError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod code_style;
pub mod loader;
mod overrides;
mod precedence;
mod rule_id;
mod rule_set;
mod severity;
mod table;

pub use code_style::{CodeStyleDefaults, CodeStyleDescriptor, CODE_STYLE_PREFIX, CODE_STYLE_RULES};
pub use loader::RuleSetError;
pub use overrides::DiagnosticOverrides;
pub use precedence::Precedence;
pub use rule_id::{InvalidRuleId, RuleId};
pub use rule_set::{RuleSet, RuleSetLayer};
pub use severity::{Severity, UnknownSeverity};
pub use table::{Layer, ResolutionIssue, RuleTable};
