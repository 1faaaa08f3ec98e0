//! `--max-count` option.

use crate::error::OptionParseError;
use crate::parser::{parse_count, OptionParser};
use crate::token::{split_token, TokenShape};
use crate::value::ValueProvider;
use crate::vocab::{names, MAX_MATCHES, MAX_MATCHING_FILES, MAX_OPTIONS};
use serde::Serialize;

/// Validated `--max-count` value. Zero means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaxOptions {
    /// Maximum number of matching items.
    pub max_count: u32,
    /// Maximum number of matches per file.
    pub max_matches: u32,
    /// Maximum number of matching files.
    pub max_matching_files: u32,
}

/// Parser for `--max-count`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxCountParser;

impl OptionParser for MaxCountParser {
    type Bundle = MaxOptions;

    fn option_name(&self) -> &str {
        names::MAX_COUNT
    }

    fn default_bundle(&self) -> MaxOptions {
        MaxOptions::default()
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<MaxOptions, OptionParseError> {
        let mut options = MaxOptions::default();

        for token in tokens {
            match split_token(token) {
                TokenShape::KeyValue { key, value } if MAX_MATCHES.is_key_or_short_key(key) => {
                    options.max_matches = parse_count(value, token)?;
                }
                TokenShape::KeyValue { key, value }
                    if MAX_MATCHING_FILES.is_key_or_short_key(key) =>
                {
                    options.max_matching_files = parse_count(value, token)?;
                }
                TokenShape::KeyValue { .. } => {
                    return Err(OptionParseError::UnrecognizedKey {
                        option: self.help_name(),
                        token: (*token).to_string(),
                        allowed: MAX_OPTIONS.help_text(),
                    });
                }
                TokenShape::Bare(bare) => {
                    options.max_count = parse_count(bare, token)?;
                }
            }
        }

        Ok(options)
    }
}
