//! Options whose value is a set of enum flags.

use crate::error::OptionParseError;
use crate::parser::{parse_enum, OptionParser};
use crate::token::{split_token, TokenShape};
use crate::value::{FlagSet, OptionEnum, Provider};

/// Parser that aggregates every token into a [`FlagSet`].
///
/// Aggregation is commutative: any permutation of the tokens yields an
/// equal set.
pub struct EnumFlagsParser<'a, T> {
    option_name: &'static str,
    provider: Provider<'a, T>,
    default: FlagSet<T>,
}

impl<'a, T: OptionEnum> EnumFlagsParser<'a, T> {
    /// Creates a parser whose empty result is the empty set.
    #[must_use]
    pub fn new(option_name: &'static str, provider: Provider<'a, T>) -> Self {
        Self {
            option_name,
            provider,
            default: FlagSet::new(),
        }
    }

    /// Sets the result for an empty token sequence.
    #[must_use]
    pub fn with_default(mut self, default: impl IntoIterator<Item = T>) -> Self {
        self.default = default.into_iter().collect();
        self
    }
}

impl<T: OptionEnum> OptionParser for EnumFlagsParser<'_, T> {
    type Bundle = FlagSet<T>;

    fn option_name(&self) -> &str {
        self.option_name
    }

    fn default_bundle(&self) -> FlagSet<T> {
        self.default.clone()
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<FlagSet<T>, OptionParseError> {
        let mut flags = FlagSet::new();
        for token in tokens {
            match split_token(token) {
                TokenShape::KeyValue { .. } => {
                    return Err(OptionParseError::UnrecognizedKey {
                        option: self.help_name(),
                        token: (*token).to_string(),
                        allowed: self.provider.help_text(),
                    });
                }
                TokenShape::Bare(bare) => {
                    flags.insert(parse_enum(bare, self.option_name, self.provider)?);
                }
            }
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{names, SearchTarget, SEARCH_TARGETS};

    fn targets() -> EnumFlagsParser<'static, SearchTarget> {
        EnumFlagsParser::new(names::TARGET, Provider::With(&SEARCH_TARGETS))
            .with_default([SearchTarget::Files])
    }

    #[test]
    fn default_set_for_empty_tokens() {
        let empty: [&str; 0] = [];
        let flags = targets().parse(&empty).unwrap();
        let expected: FlagSet<SearchTarget> = [SearchTarget::Files].into_iter().collect();
        assert_eq!(flags, expected);
    }

    #[test]
    fn aggregation_is_commutative() {
        let forward = targets().parse(&["f", "directories", "all"]).unwrap();
        let backward = targets().parse(&["all", "directories", "f"]).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 3);
    }

    #[test]
    fn no_provider_uses_member_names() {
        let parser = EnumFlagsParser::<SearchTarget>::new(names::TARGET, Provider::NoProvider);
        assert!(parser.parse(&["Directories"]).unwrap().contains(SearchTarget::Directories));
        assert!(parser.parse(&["d"]).is_err());
    }

    #[test]
    fn invalid_token_lists_vocabulary() {
        let err = targets().parse(&["files", "links"]).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Option '--target' has invalid value 'links'. Allowed values: all, directories, files."
        );
    }

    #[test]
    fn key_value_tokens_are_rejected() {
        let err = targets().parse(&["depth=2"]).unwrap_err();
        assert!(matches!(err, OptionParseError::UnrecognizedKey { .. }));
    }
}
