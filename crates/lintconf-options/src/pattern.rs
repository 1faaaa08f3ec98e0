//! Regular-expression options such as `--name` and `--content`.

use crate::error::OptionParseError;
use crate::parser::OptionParser;
use crate::token::{split_token, TokenShape};
use crate::value::{FlagSet, Provider, ValueProvider};
use crate::vocab::{PatternFlag, PATTERN_FLAGS, PATTERN_GROUP};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Validated pattern option: a compiled regex plus its matching mode.
#[derive(Debug, Clone, Serialize)]
pub struct PatternOptions {
    /// Effective pattern, after `literal`, `whole-word` and `whole-line`
    /// were applied.
    pub pattern: String,
    /// Flags as given.
    pub flags: FlagSet<PatternFlag>,
    /// Capture group whose text is reported instead of the whole match.
    pub group: Option<String>,
    /// Inverted matching.
    pub negative: bool,
    #[serde(skip)]
    regex: Regex,
}

impl PatternOptions {
    /// The compiled regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns `true` if `text` is selected, honoring `negative`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text) != self.negative
    }

    /// Text of the first match, or of the configured group within it.
    ///
    /// Always `None` for a negative pattern.
    #[must_use]
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        if self.negative {
            return None;
        }
        let captures = self.regex.captures(text)?;
        let found = match &self.group {
            Some(group) => group
                .parse::<usize>()
                .ok()
                .map_or_else(|| captures.name(group), |index| captures.get(index))?,
            None => captures.get(0)?,
        };
        Some(found.as_str())
    }
}

impl PartialEq for PatternOptions {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.flags == other.flags
            && self.group == other.group
            && self.negative == other.negative
    }
}

/// Parser for a pattern option.
///
/// The first token is always the pattern. Remaining tokens are
/// `group=<GROUP_NAME>` or bare pattern flags.
#[derive(Debug, Clone, Copy)]
pub struct PatternParser {
    option_name: &'static str,
}

impl PatternParser {
    /// Creates a parser for the named option.
    #[must_use]
    pub fn new(option_name: &'static str) -> Self {
        Self { option_name }
    }

    fn invalid(&self, message: String) -> OptionParseError {
        OptionParseError::InvalidRegexPattern {
            option: self.help_name(),
            message,
        }
    }
}

impl OptionParser for PatternParser {
    type Bundle = Option<PatternOptions>;

    fn option_name(&self) -> &str {
        self.option_name
    }

    fn default_bundle(&self) -> Option<PatternOptions> {
        None
    }

    fn parse_tokens(&self, tokens: &[&str]) -> Result<Option<PatternOptions>, OptionParseError> {
        let Some((pattern, rest)) = tokens.split_first() else {
            return Ok(None);
        };

        let mut flags = FlagSet::new();
        let mut group = None;

        for token in rest {
            match split_token(token) {
                TokenShape::KeyValue { key, value } if PATTERN_GROUP.is_key_or_short_key(key) => {
                    group = Some(value.to_string());
                }
                TokenShape::KeyValue { .. } => {
                    return Err(OptionParseError::UnrecognizedKey {
                        option: self.help_name(),
                        token: (*token).to_string(),
                        allowed: PATTERN_FLAGS.help_text(),
                    });
                }
                TokenShape::Bare(bare) => {
                    let flag = Provider::With(&PATTERN_FLAGS).parse(bare).ok_or_else(|| {
                        OptionParseError::UnrecognizedFlagToken {
                            option: self.help_name(),
                            token: bare.to_string(),
                            allowed: PATTERN_FLAGS.help_text(),
                        }
                    })?;
                    flags.insert(flag);
                }
            }
        }

        let effective = effective_pattern(pattern, &flags);
        let regex = RegexBuilder::new(&effective)
            .case_insensitive(flags.contains(PatternFlag::IgnoreCase))
            .multi_line(
                flags.contains(PatternFlag::Multiline) || flags.contains(PatternFlag::WholeLine),
            )
            .dot_matches_new_line(flags.contains(PatternFlag::Singleline))
            .ignore_whitespace(flags.contains(PatternFlag::IgnorePatternWhitespace))
            .build()
            .map_err(|e| self.invalid(e.to_string()))?;

        if let Some(group) = &group {
            if !has_group(&regex, group) {
                return Err(self.invalid(format!("group '{group}' does not exist")));
            }
        }

        Ok(Some(PatternOptions {
            pattern: effective,
            negative: flags.contains(PatternFlag::Negative),
            flags,
            group,
            regex,
        }))
    }
}

fn effective_pattern(pattern: &str, flags: &FlagSet<PatternFlag>) -> String {
    let mut effective = if flags.contains(PatternFlag::Literal) {
        regex::escape(pattern)
    } else {
        pattern.to_string()
    };
    if flags.contains(PatternFlag::WholeWord) {
        effective = format!(r"\b(?:{effective})\b");
    }
    if flags.contains(PatternFlag::WholeLine) {
        effective = format!("^(?:{effective})$");
    }
    effective
}

fn has_group(regex: &Regex, group: &str) -> bool {
    match group.parse::<usize>() {
        Ok(index) => index < regex.captures_len(),
        Err(_) => regex.capture_names().flatten().any(|name| name == group),
    }
}
