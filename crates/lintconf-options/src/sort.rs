//! `--sort` option.

use crate::error::OptionParseError;
use crate::parser::{parse_count, OptionParser};
use crate::token::{split_token, TokenShape};
use crate::value::{FlagSet, Provider, ValueProvider};
use crate::vocab::{names, SortFlag, SORT_FLAGS, SORT_MAX_COUNT};
use serde::Serialize;

/// Property to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortProperty {
    /// File or directory name.
    Name,
    /// Creation time.
    CreationTime,
    /// Last modification time.
    ModifiedTime,
    /// Size in bytes.
    Size,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// One sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SortDescriptor {
    /// What to compare.
    pub property: SortProperty,
    /// In which direction.
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(property: SortProperty, direction: SortDirection) -> Self {
        Self {
            property,
            direction,
        }
    }
}

/// Validated `--sort` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOptions {
    /// Sort keys, most significant first.
    pub descriptors: Vec<SortDescriptor>,
    /// Maximum number of sorted items to keep (0 = unlimited).
    pub max_count: u32,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            descriptors: vec![SortDescriptor::new(
                SortProperty::Name,
                SortDirection::Ascending,
            )],
            max_count: 0,
        }
    }
}

/// Parser for `--sort`.
///
/// Bare tokens are aggregated as flags; `descending` applies to every
/// selected property. Properties keep the order of their first mention.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortParser;

impl OptionParser for SortParser {
    type Bundle = SortOptions;

    fn option_name(&self) -> &str {
        names::SORT
    }

    fn default_bundle(&self) -> SortOptions {
        SortOptions::default()
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<SortOptions, OptionParseError> {
        let mut max_count = 0;
        let mut flags = FlagSet::new();

        for token in tokens {
            match split_token(token) {
                TokenShape::KeyValue { key, value } => {
                    if SORT_MAX_COUNT.is_key_or_short_key(key) {
                        max_count = parse_count(value, token)?;
                    } else {
                        return Err(OptionParseError::UnrecognizedKey {
                            option: self.help_name(),
                            token: (*token).to_string(),
                            allowed: SORT_FLAGS.help_text(),
                        });
                    }
                }
                TokenShape::Bare(bare) => {
                    let flag = Provider::With(&SORT_FLAGS).parse(bare).ok_or_else(|| {
                        OptionParseError::UnrecognizedFlagToken {
                            option: self.help_name(),
                            token: bare.to_string(),
                            allowed: SORT_FLAGS.help_text(),
                        }
                    })?;
                    flags.insert(flag);
                }
            }
        }

        Ok(SortOptions {
            descriptors: descriptors(&flags),
            max_count,
        })
    }
}

fn descriptors(flags: &FlagSet<SortFlag>) -> Vec<SortDescriptor> {
    let direction = if flags.contains(SortFlag::Descending) {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    let descriptors: Vec<SortDescriptor> = flags
        .iter()
        .filter_map(|flag| match flag {
            SortFlag::Name => Some(SortProperty::Name),
            SortFlag::CreationTime => Some(SortProperty::CreationTime),
            SortFlag::ModifiedTime => Some(SortProperty::ModifiedTime),
            SortFlag::Size => Some(SortProperty::Size),
            SortFlag::Ascending | SortFlag::Descending => None,
        })
        .map(|property| SortDescriptor::new(property, direction))
        .collect();

    if descriptors.is_empty() {
        SortOptions::default().descriptors
    } else {
        descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn parse(tokens: &[&str]) -> Result<SortOptions, OptionParseError> {
        SortParser.parse(tokens)
    }

    #[test]
    fn empty_tokens_give_default() {
        let empty: [&str; 0] = [];
        let options = SortParser.parse(&empty).unwrap();
        assert_eq!(
            options.descriptors,
            [SortDescriptor::new(SortProperty::Name, SortDirection::Ascending)]
        );
        assert_eq!(options.max_count, 0);
    }

    #[test]
    fn size_descending_with_max_count() {
        let options = parse(&["size", "descending", "max-count=5"]).unwrap();
        assert_eq!(
            options,
            SortOptions {
                descriptors: vec![SortDescriptor::new(
                    SortProperty::Size,
                    SortDirection::Descending
                )],
                max_count: 5,
            }
        );
    }

    #[test]
    fn direction_applies_to_every_property() {
        let options = parse(&["d", "name", "mt"]).unwrap();
        assert_eq!(
            options.descriptors,
            [
                SortDescriptor::new(SortProperty::Name, SortDirection::Descending),
                SortDescriptor::new(SortProperty::ModifiedTime, SortDirection::Descending),
            ]
        );
    }

    #[test]
    fn only_direction_falls_back_to_name_ascending() {
        let options = parse(&["descending"]).unwrap();
        assert_eq!(options.descriptors, SortOptions::default().descriptors);
    }

    #[test]
    fn flag_order_gives_same_descriptor_set() {
        let as_set = |tokens: &[&str]| -> HashSet<SortDescriptor> {
            parse(tokens).unwrap().descriptors.into_iter().collect()
        };
        let forward = as_set(&["size", "ct", "d"]);
        let backward = as_set(&["d", "ct", "size"]);

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 2);
        assert!(forward
            .iter()
            .all(|descriptor| descriptor.direction == SortDirection::Descending));
    }

    #[test]
    fn repeated_property_is_listed_once() {
        let options = parse(&["size", "s", "Size"]).unwrap();
        assert_eq!(options.descriptors.len(), 1);
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let options = parse(&["mc=3", "max-count=9"]).unwrap();
        assert_eq!(options.max_count, 9);
    }

    #[test]
    fn negative_max_count_is_rejected() {
        let err = parse(&["max-count=-1"]).unwrap_err();
        assert!(matches!(err, OptionParseError::InvalidNumericLiteral { .. }));
    }

    #[test]
    fn unknown_key_names_option_and_vocabulary() {
        let err = parse(&["bogus=1"]).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Option '--sort' has invalid value 'bogus=1'. Allowed values: ascending, creation-time, descending, max-count=<NUM>, modified-time, name, size."
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["name", "height"]).unwrap_err();
        assert_eq!(
            err,
            OptionParseError::UnrecognizedFlagToken {
                option: "--sort".to_string(),
                token: "height".to_string(),
                allowed: SORT_FLAGS.help_text(),
            }
        );
    }

    #[test]
    fn first_error_wins() {
        let err = parse(&["height", "bogus=1"]).unwrap_err();
        assert!(matches!(err, OptionParseError::UnrecognizedFlagToken { .. }));
    }
}
