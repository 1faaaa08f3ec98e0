//! `--output` option.

use crate::error::OptionParseError;
use crate::parser::OptionParser;
use crate::paths::PathResolver;
use crate::token::{split_token, TokenShape};
use crate::value::{Provider, ValueProvider};
use crate::vocab::{
    names, OutputFlag, TextEncoding, Verbosity, ENCODINGS, OUTPUT_ENCODING, OUTPUT_FLAGS,
    OUTPUT_VERBOSITY, VERBOSITY,
};
use serde::Serialize;
use std::path::PathBuf;

/// Validated `--output` value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputOptions {
    /// Absolute output file path; `None` when the option was not given.
    pub path: Option<PathBuf>,
    /// Verbosity of what is written to the file.
    pub verbosity: Verbosity,
    /// File encoding.
    pub encoding: TextEncoding,
    /// Append instead of overwriting.
    pub append: bool,
}

/// Parser for `--output`.
///
/// The first token is always the path. Remaining tokens are
/// `verbosity=`, `encoding=` or the bare `append` flag.
#[derive(Debug, Clone, Default)]
pub struct OutputParser {
    resolver: PathResolver,
}

impl OutputParser {
    /// Creates a parser that resolves the path with `resolver`.
    #[must_use]
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    fn invalid_value(&self, token: &str, allowed: String) -> OptionParseError {
        OptionParseError::InvalidEnumToken {
            option: self.help_name(),
            token: token.to_string(),
            allowed,
        }
    }
}

impl OptionParser for OutputParser {
    type Bundle = OutputOptions;

    fn option_name(&self) -> &str {
        names::OUTPUT
    }

    fn default_bundle(&self) -> OutputOptions {
        OutputOptions::default()
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<OutputOptions, OptionParseError> {
        let Some((path, rest)) = tokens.split_first() else {
            return Ok(self.default_bundle());
        };

        let mut options = OutputOptions {
            path: Some(self.resolver.resolve(self.option_name(), path)?),
            ..OutputOptions::default()
        };

        for token in rest {
            match split_token(token) {
                TokenShape::KeyValue { key, value } if OUTPUT_VERBOSITY.is_key_or_short_key(key) => {
                    options.verbosity = Provider::With(&VERBOSITY)
                        .parse(value)
                        .ok_or_else(|| self.invalid_value(token, VERBOSITY.help_text()))?;
                }
                TokenShape::KeyValue { key, value } if OUTPUT_ENCODING.is_key_or_short_key(key) => {
                    options.encoding = Provider::With(&ENCODINGS)
                        .parse(value)
                        .ok_or_else(|| self.invalid_value(token, ENCODINGS.help_text()))?;
                }
                TokenShape::KeyValue { .. } => {
                    return Err(OptionParseError::UnrecognizedKey {
                        option: self.help_name(),
                        token: (*token).to_string(),
                        allowed: OUTPUT_FLAGS.help_text(),
                    });
                }
                TokenShape::Bare(bare) => {
                    let flag = Provider::With(&OUTPUT_FLAGS).parse(bare).ok_or_else(|| {
                        OptionParseError::UnrecognizedFlagToken {
                            option: self.help_name(),
                            token: bare.to_string(),
                            allowed: OUTPUT_FLAGS.help_text(),
                        }
                    })?;
                    match flag {
                        OutputFlag::Append => options.append = true,
                    }
                }
            }
        }

        Ok(options)
    }
}
