//! `--property NAME=VALUE` options.

use crate::error::OptionParseError;
use crate::parser::OptionParser;
use crate::token::{split_token, TokenShape};
use std::collections::BTreeMap;

/// Parser for `NAME=VALUE` lists.
///
/// A repeated name keeps the last value. Values may be empty and may
/// themselves contain `=`.
#[derive(Debug, Clone, Copy)]
pub struct PropertiesParser {
    option_name: &'static str,
}

impl PropertiesParser {
    /// Creates a parser for the named option.
    #[must_use]
    pub fn new(option_name: &'static str) -> Self {
        Self { option_name }
    }
}

impl OptionParser for PropertiesParser {
    type Bundle = BTreeMap<String, String>;

    fn option_name(&self) -> &str {
        self.option_name
    }

    fn default_bundle(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<BTreeMap<String, String>, OptionParseError> {
        let mut properties = BTreeMap::new();
        for token in tokens {
            match split_token(token) {
                TokenShape::KeyValue { key, value } if !key.trim().is_empty() => {
                    properties.insert(key.trim().to_string(), value.to_string());
                }
                _ => {
                    return Err(OptionParseError::MalformedProperty {
                        option: self.help_name(),
                        token: (*token).to_string(),
                    });
                }
            }
        }
        Ok(properties)
    }
}
