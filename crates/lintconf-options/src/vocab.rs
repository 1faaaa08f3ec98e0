//! Option names, enum vocabularies and their providers.

use crate::value::{FlagValue, KeyOption, OptionEnum, OptionValueProvider};
use lintconf_core::Severity;
use serde::Serialize;

/// Canonical option names, without leading dashes.
pub mod names {
    /// `--sort`
    pub const SORT: &str = "sort";
    /// `--output`
    pub const OUTPUT: &str = "output";
    /// `--max-count`
    pub const MAX_COUNT: &str = "max-count";
    /// `--name`
    pub const NAME: &str = "name";
    /// `--content`
    pub const CONTENT: &str = "content";
    /// `--target`
    pub const TARGET: &str = "target";
    /// `--property`
    pub const PROPERTY: &str = "property";
    /// `--paths`
    pub const PATHS: &str = "paths";
    /// `--verbosity`
    pub const VERBOSITY: &str = "verbosity";
    /// `--default-severity`
    pub const DEFAULT_SEVERITY: &str = "default-severity";
    /// `--override`
    pub const OVERRIDE: &str = "override";
}

macro_rules! option_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl OptionEnum for $ty {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

// ── Sort ──

/// Bare tokens accepted by `--sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortFlag {
    /// Sort by name.
    Name,
    /// Sort by creation time.
    CreationTime,
    /// Sort by last modification time.
    ModifiedTime,
    /// Sort by size.
    Size,
    /// Ascending direction (the default).
    Ascending,
    /// Descending direction.
    Descending,
}

option_enum!(SortFlag {
    Name,
    CreationTime,
    ModifiedTime,
    Size,
    Ascending,
    Descending,
});

/// `max-count=<NUM>` sub-option of `--sort`.
pub const SORT_MAX_COUNT: KeyOption = KeyOption::new("max-count", "mc", "<NUM>");

const SORT_FLAG_VALUES: &[FlagValue<SortFlag>] = &[
    FlagValue::new("name", "n", SortFlag::Name),
    FlagValue::new("creation-time", "ct", SortFlag::CreationTime),
    FlagValue::new("modified-time", "mt", SortFlag::ModifiedTime),
    FlagValue::new("size", "s", SortFlag::Size),
    FlagValue::new("ascending", "a", SortFlag::Ascending),
    FlagValue::new("descending", "d", SortFlag::Descending),
];

/// Vocabulary of `--sort`.
pub static SORT_FLAGS: OptionValueProvider<SortFlag> =
    OptionValueProvider::new(SORT_FLAG_VALUES, &[SORT_MAX_COUNT], &[]);

// ── Output ──

/// Logging verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Nothing but errors.
    Quiet,
    /// Minimal output.
    Minimal,
    /// Regular output.
    #[default]
    Normal,
    /// Detailed output.
    Detailed,
    /// Everything.
    Diagnostic,
}

option_enum!(Verbosity {
    Quiet,
    Minimal,
    Normal,
    Detailed,
    Diagnostic,
});

const VERBOSITY_VALUES: &[FlagValue<Verbosity>] = &[
    FlagValue::new("quiet", "q", Verbosity::Quiet),
    FlagValue::new("minimal", "m", Verbosity::Minimal),
    FlagValue::new("normal", "n", Verbosity::Normal),
    FlagValue::new("detailed", "d", Verbosity::Detailed),
    FlagValue::new("diagnostic", "diag", Verbosity::Diagnostic),
];

/// Vocabulary of verbosity values.
pub static VERBOSITY: OptionValueProvider<Verbosity> =
    OptionValueProvider::new(VERBOSITY_VALUES, &[], &[]);

/// Text encoding of an output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8 with byte order mark.
    #[default]
    Utf8,
    /// UTF-8 without byte order mark.
    Utf8NoBom,
    /// UTF-16 little endian.
    Utf16,
    /// UTF-16 big endian.
    Utf16BigEndian,
    /// UTF-32 little endian.
    Utf32,
    /// 7-bit ASCII.
    Ascii,
    /// ISO-8859-1.
    Latin1,
}

option_enum!(TextEncoding {
    Utf8,
    Utf8NoBom,
    Utf16,
    Utf16BigEndian,
    Utf32,
    Ascii,
    Latin1,
});

const ENCODING_VALUES: &[FlagValue<TextEncoding>] = &[
    FlagValue::long("utf-8", TextEncoding::Utf8),
    FlagValue::long("utf-8-no-bom", TextEncoding::Utf8NoBom),
    FlagValue::new("utf-16", "unicode", TextEncoding::Utf16),
    FlagValue::new("utf-16be", "unicodefffe", TextEncoding::Utf16BigEndian),
    FlagValue::long("utf-32", TextEncoding::Utf32),
    FlagValue::new("us-ascii", "ascii", TextEncoding::Ascii),
    FlagValue::new("iso-8859-1", "latin1", TextEncoding::Latin1),
];

/// Vocabulary of encoding names.
pub static ENCODINGS: OptionValueProvider<TextEncoding> =
    OptionValueProvider::new(ENCODING_VALUES, &[], &[]);

/// Bare tokens accepted by `--output` after the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputFlag {
    /// Append to the file instead of overwriting it.
    Append,
}

option_enum!(OutputFlag { Append });

/// `verbosity=<VERBOSITY>` sub-option of `--output`.
pub const OUTPUT_VERBOSITY: KeyOption = KeyOption::new("verbosity", "v", "<VERBOSITY>");

/// `encoding=<ENCODING>` sub-option of `--output`.
pub const OUTPUT_ENCODING: KeyOption = KeyOption::new("encoding", "e", "<ENCODING>");

const OUTPUT_FLAG_VALUES: &[FlagValue<OutputFlag>] =
    &[FlagValue::new("append", "a", OutputFlag::Append)];

/// Vocabulary of `--output`.
pub static OUTPUT_FLAGS: OptionValueProvider<OutputFlag> = OptionValueProvider::new(
    OUTPUT_FLAG_VALUES,
    &[OUTPUT_VERBOSITY, OUTPUT_ENCODING],
    &[],
);

// ── Max count ──

/// `matches=<NUM>` sub-option of `--max-count`.
pub const MAX_MATCHES: KeyOption = KeyOption::new("matches", "m", "<NUM>");

/// `matching-files=<NUM>` sub-option of `--max-count`.
pub const MAX_MATCHING_FILES: KeyOption = KeyOption::new("matching-files", "mf", "<NUM>");

/// Vocabulary of `--max-count`; it has no bare flags, only a bare count.
pub static MAX_OPTIONS: OptionValueProvider<()> =
    OptionValueProvider::new(&[], &[MAX_MATCHES, MAX_MATCHING_FILES], &["<NUM>"]);

// ── Pattern ──

/// Bare tokens accepted by pattern options after the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatternFlag {
    /// Case-insensitive matching.
    IgnoreCase,
    /// `^` and `$` match at line boundaries.
    Multiline,
    /// `.` matches newlines.
    Singleline,
    /// Whitespace and `#` comments in the pattern are ignored.
    IgnorePatternWhitespace,
    /// The pattern must match whole words.
    WholeWord,
    /// The pattern must match whole lines.
    WholeLine,
    /// The pattern is literal text, not a regular expression.
    Literal,
    /// Select what does not match.
    Negative,
}

option_enum!(PatternFlag {
    IgnoreCase,
    Multiline,
    Singleline,
    IgnorePatternWhitespace,
    WholeWord,
    WholeLine,
    Literal,
    Negative,
});

/// `group=<GROUP_NAME>` sub-option of pattern options.
pub const PATTERN_GROUP: KeyOption = KeyOption::new("group", "g", "<GROUP_NAME>");

const PATTERN_FLAG_VALUES: &[FlagValue<PatternFlag>] = &[
    FlagValue::new("ignore-case", "i", PatternFlag::IgnoreCase),
    FlagValue::new("multiline", "m", PatternFlag::Multiline),
    FlagValue::new("singleline", "s", PatternFlag::Singleline),
    FlagValue::new("ignore-pattern-whitespace", "x", PatternFlag::IgnorePatternWhitespace),
    FlagValue::new("whole-word", "w", PatternFlag::WholeWord),
    FlagValue::new("whole-line", "l", PatternFlag::WholeLine),
    FlagValue::new("literal", "li", PatternFlag::Literal),
    FlagValue::new("negative", "n", PatternFlag::Negative),
];

/// Vocabulary of pattern options.
pub static PATTERN_FLAGS: OptionValueProvider<PatternFlag> =
    OptionValueProvider::new(PATTERN_FLAG_VALUES, &[PATTERN_GROUP], &[]);

// ── Search target ──

/// What a file-system search reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTarget {
    /// Files only.
    #[default]
    Files,
    /// Directories only.
    Directories,
    /// Files and directories.
    All,
}

option_enum!(SearchTarget {
    Files,
    Directories,
    All,
});

const SEARCH_TARGET_VALUES: &[FlagValue<SearchTarget>] = &[
    FlagValue::new("files", "f", SearchTarget::Files),
    FlagValue::new("directories", "d", SearchTarget::Directories),
    FlagValue::new("all", "a", SearchTarget::All),
];

/// Vocabulary of `--target`.
pub static SEARCH_TARGETS: OptionValueProvider<SearchTarget> =
    OptionValueProvider::new(SEARCH_TARGET_VALUES, &[], &[]);

// ── Severity ──

option_enum!(Severity {
    Default,
    Suppress,
    Hidden,
    Info,
    Warning,
    Error,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Provider, ValueProvider};

    #[test]
    fn sort_help_text_is_sorted() {
        insta::assert_snapshot!(
            SORT_FLAGS.help_text(),
            @"ascending, creation-time, descending, max-count=<NUM>, modified-time, name, size"
        );
    }

    #[test]
    fn max_options_help_text_lists_bare_count_first() {
        insta::assert_snapshot!(
            MAX_OPTIONS.help_text(),
            @"<NUM>, matches=<NUM>, matching-files=<NUM>"
        );
    }

    #[test]
    fn encoding_aliases_resolve() {
        let encodings = Provider::With(&ENCODINGS);
        assert_eq!(encodings.parse("UTF-8"), Some(TextEncoding::Utf8));
        assert_eq!(encodings.parse("utf8"), Some(TextEncoding::Utf8));
        assert_eq!(encodings.parse("utf-8-no-bom"), Some(TextEncoding::Utf8NoBom));
        assert_eq!(encodings.parse("unicode"), Some(TextEncoding::Utf16));
        assert_eq!(encodings.parse("latin1"), Some(TextEncoding::Latin1));
        assert_eq!(encodings.parse("ebcdic"), None);
    }

    #[test]
    fn severity_uses_member_names() {
        let severities = Provider::<Severity>::NoProvider;
        assert_eq!(severities.parse("warning"), Some(Severity::Warning));
        assert_eq!(severities.parse("SUPPRESS"), Some(Severity::Suppress));
        assert_eq!(
            severities.help_text(),
            "default, error, hidden, info, suppress, warning"
        );
    }

    #[test]
    fn short_aliases_resolve() {
        let sort = Provider::With(&SORT_FLAGS);
        assert_eq!(sort.parse("ct"), Some(SortFlag::CreationTime));
        assert_eq!(sort.parse("ModifiedTime"), Some(SortFlag::ModifiedTime));
        assert_eq!(Provider::With(&VERBOSITY).parse("diag"), Some(Verbosity::Diagnostic));
    }
}
