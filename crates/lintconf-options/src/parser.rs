//! The composite option parser seam and shared value parsers.

use crate::error::{help_name, OptionParseError};
use crate::value::{OptionEnum, Provider};
use crate::vocab::names;

/// Parses the token sequence of one logical command-line option.
///
/// Implementations see only non-empty sequences; [`OptionParser::parse`]
/// answers the empty case with [`OptionParser::default_bundle`]. Parsing is
/// fail-fast: the first bad token aborts and no partial bundle escapes.
pub trait OptionParser {
    /// Validated result.
    type Bundle;

    /// Canonical option name, without dashes.
    fn option_name(&self) -> &str;

    /// Result for an empty token sequence.
    fn default_bundle(&self) -> Self::Bundle;

    /// Parses a non-empty token sequence.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionParseError`] encountered.
    fn parse_tokens(&self, tokens: &[&str]) -> Result<Self::Bundle, OptionParseError>;

    /// Help name of the option (e.g. `--sort`).
    fn help_name(&self) -> String {
        help_name(self.option_name())
    }

    /// Parses a token sequence, empty or not.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionParseError`] encountered.
    fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Self::Bundle, OptionParseError>
    where
        Self: Sized,
    {
        if tokens.is_empty() {
            return Ok(self.default_bundle());
        }
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        tracing::debug!(option = self.option_name(), count = tokens.len(), "parsing option tokens");
        self.parse_tokens(&tokens)
    }
}

/// Parses a count: ASCII digits only, no sign, no separators, at most
/// `i32::MAX`.
///
/// Failures always name `--max-count` and report `token`, the whole token
/// as given rather than just the value.
///
/// # Errors
///
/// Returns [`OptionParseError::InvalidNumericLiteral`].
pub fn parse_count(value: &str, token: &str) -> Result<u32, OptionParseError> {
    let invalid = || OptionParseError::InvalidNumericLiteral {
        option: help_name(names::MAX_COUNT),
        token: token.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value
        .parse::<u32>()
        .ok()
        .filter(|n| i32::try_from(*n).is_ok())
        .ok_or_else(invalid)
}

/// Parses one enum token.
///
/// # Errors
///
/// Returns [`OptionParseError::InvalidEnumToken`] listing the accepted
/// tokens.
pub fn parse_enum<T: OptionEnum>(
    token: &str,
    option_name: &str,
    provider: Provider<'_, T>,
) -> Result<T, OptionParseError> {
    provider
        .parse(token)
        .ok_or_else(|| OptionParseError::InvalidEnumToken {
            option: help_name(option_name),
            token: token.to_string(),
            allowed: provider.help_text(),
        })
}

/// Parses every token as an enum value, keeping order and duplicates.
///
/// An empty sequence yields `default`.
///
/// # Errors
///
/// Returns the error for the first invalid token.
pub fn parse_enum_values<T: OptionEnum, S: AsRef<str>>(
    tokens: &[S],
    option_name: &str,
    provider: Provider<'_, T>,
    default: &[T],
) -> Result<Vec<T>, OptionParseError> {
    if tokens.is_empty() {
        return Ok(default.to_vec());
    }
    tokens
        .iter()
        .map(|token| parse_enum(token.as_ref(), option_name, provider))
        .collect()
}

/// Parses a character value.
///
/// Accepts `\N` for a single digit `N`, a decimal code point in
/// `0..=65535`, or a token consisting of exactly one character.
///
/// # Errors
///
/// Returns [`OptionParseError::InvalidChar`].
pub fn parse_char(token: &str, option_name: &str) -> Result<char, OptionParseError> {
    let invalid = |reason: &str| OptionParseError::InvalidChar {
        option: help_name(option_name),
        token: token.to_string(),
        reason: reason.to_string(),
    };

    if let [b'\\', digit] = token.as_bytes() {
        if digit.is_ascii_digit() {
            return Ok(char::from(*digit));
        }
    }

    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let code = token
            .parse::<u32>()
            .ok()
            .filter(|code| *code <= 0xFFFF)
            .ok_or_else(|| invalid("value must be in range from 0 to 65535"))?;
        return char::from_u32(code).ok_or_else(|| invalid("value is not a valid character"));
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid("could not parse as character value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{SearchTarget, SEARCH_TARGETS};
    use lintconf_core::Severity;

    #[test]
    fn count_accepts_plain_digits() {
        assert_eq!(parse_count("42", "max-count=42"), Ok(42));
        assert_eq!(parse_count("0", "0"), Ok(0));
        assert_eq!(parse_count("007", "007"), Ok(7));
    }

    #[test]
    fn count_rejects_sign_separators_and_overflow() {
        for value in ["-1", "+1", "1,000", " 1", "1.5", "", "x", "2147483648"] {
            assert!(parse_count(value, value).is_err(), "{value:?} should fail");
        }
        assert_eq!(parse_count("2147483647", "x"), Ok(2_147_483_647));
    }

    #[test]
    fn count_error_names_max_count_and_whole_token() {
        let err = parse_count("-1", "matches=-1").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Option '--max-count' has invalid value 'matches=-1'.");
    }

    #[test]
    fn enum_with_provider() {
        assert_eq!(
            parse_enum("d", "target", Provider::With(&SEARCH_TARGETS)),
            Ok(SearchTarget::Directories)
        );
        let err = parse_enum("dirs", "target", Provider::With(&SEARCH_TARGETS)).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Option '--target' has invalid value 'dirs'. Allowed values: all, directories, files."
        );
    }

    #[test]
    fn enum_values_keep_order_and_default() {
        let values = parse_enum_values(
            &["error", "info", "error"],
            "severity",
            Provider::<Severity>::NoProvider,
            &[],
        )
        .unwrap();
        assert_eq!(values, [Severity::Error, Severity::Info, Severity::Error]);

        let empty: [&str; 0] = [];
        let values =
            parse_enum_values(&empty, "severity", Provider::NoProvider, &[Severity::Warning])
                .unwrap();
        assert_eq!(values, [Severity::Warning]);
    }

    #[test]
    fn char_forms() {
        assert_eq!(parse_char("\\5", "separator"), Ok('5'));
        assert_eq!(parse_char("65", "separator"), Ok('A'));
        assert_eq!(parse_char("5", "separator"), Ok('\u{5}'));
        assert_eq!(parse_char(";", "separator"), Ok(';'));
        assert_eq!(parse_char("é", "separator"), Ok('é'));
    }

    #[test]
    fn char_rejections() {
        assert!(parse_char("65536", "separator").is_err());
        assert!(parse_char("55296", "separator").is_err());
        assert!(parse_char("ab", "separator").is_err());
        assert!(parse_char("", "separator").is_err());
    }
}
