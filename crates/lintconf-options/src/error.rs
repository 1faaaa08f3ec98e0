//! Option parse errors.

use miette::Diagnostic;

/// Why an option's tokens were rejected.
///
/// `option` fields hold the option's help name (e.g. `--sort`); `allowed`
/// fields hold the vocabulary's help text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum OptionParseError {
    /// A `key=value` token whose key the option does not know.
    #[error("Option '{option}' has invalid value '{token}'. Allowed values: {allowed}.")]
    #[diagnostic(code(lintconf::option::unrecognized_key))]
    UnrecognizedKey {
        /// Option help name.
        option: String,
        /// The whole offending token.
        token: String,
        /// Accepted tokens.
        allowed: String,
    },

    /// A bare token that is not one of the option's flags.
    #[error("Option '{option}' has invalid value '{token}'. Allowed values: {allowed}.")]
    #[diagnostic(code(lintconf::option::unrecognized_flag))]
    UnrecognizedFlagToken {
        /// Option help name.
        option: String,
        /// The offending token.
        token: String,
        /// Accepted tokens.
        allowed: String,
    },

    /// A count that is not a non-negative base-10 integer.
    #[error("Option '{option}' has invalid value '{token}'.")]
    #[diagnostic(
        code(lintconf::option::invalid_number),
        help("counts are non-negative integers without sign or separators")
    )]
    InvalidNumericLiteral {
        /// Option help name.
        option: String,
        /// The whole offending token.
        token: String,
    },

    /// A value that is not a member of the expected enum.
    #[error("Option '{option}' has invalid value '{token}'. Allowed values: {allowed}.")]
    #[diagnostic(code(lintconf::option::invalid_enum))]
    InvalidEnumToken {
        /// Option help name.
        option: String,
        /// The offending token.
        token: String,
        /// Accepted tokens.
        allowed: String,
    },

    /// A pattern that does not compile.
    #[error("Could not parse '{option}' value: {message}")]
    #[diagnostic(code(lintconf::option::invalid_regex))]
    InvalidRegexPattern {
        /// Option help name.
        option: String,
        /// Compiler message.
        message: String,
    },

    /// A path that cannot be made absolute.
    #[error("Option '{option}' has invalid value '{path}': {message}.")]
    #[diagnostic(code(lintconf::option::invalid_path))]
    InvalidPath {
        /// Option help name.
        option: String,
        /// The offending path.
        path: String,
        /// Reason.
        message: String,
    },

    /// A property token without `NAME=VALUE` shape.
    #[error("Option '{option}' has invalid value '{token}'. Expected <NAME>=<VALUE>.")]
    #[diagnostic(code(lintconf::option::malformed_property))]
    MalformedProperty {
        /// Option help name.
        option: String,
        /// The offending token.
        token: String,
    },

    /// A token that is not a character value.
    #[error("Option '{option}' has invalid value '{token}': {reason}.")]
    #[diagnostic(code(lintconf::option::invalid_char))]
    InvalidChar {
        /// Option help name.
        option: String,
        /// The offending token.
        token: String,
        /// Reason.
        reason: String,
    },
}

impl OptionParseError {
    /// Help name of the option the error belongs to, if it has one.
    #[must_use]
    pub fn option(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedKey { option, .. }
            | Self::UnrecognizedFlagToken { option, .. }
            | Self::InvalidNumericLiteral { option, .. }
            | Self::InvalidEnumToken { option, .. }
            | Self::InvalidRegexPattern { option, .. }
            | Self::MalformedProperty { option, .. }
            | Self::InvalidPath { option, .. }
            | Self::InvalidChar { option, .. } => Some(option),
        }
    }
}

/// Help name of an option (`sort` → `--sort`).
#[must_use]
pub fn help_name(option_name: &str) -> String {
    format!("--{option_name}")
}
