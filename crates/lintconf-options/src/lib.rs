//! # lintconf-options
//!
//! Parsing of composite command-line options.
//!
//! A composite option takes a sequence of tokens, each either a bare flag
//! (`descending`) or a `key=value` sub-option (`max-count=5`). Every option
//! family has an [`OptionParser`] that validates the tokens into a typed
//! bundle or fails with an [`OptionParseError`] naming the option and the
//! values it accepts.
//!
//! ## Example
//!
//! ```
//! use lintconf_options::{OptionParser, SortDirection, SortParser, SortProperty};
//!
//! let sort = SortParser.parse(&["size", "descending", "max-count=5"])?;
//! assert_eq!(sort.descriptors[0].property, SortProperty::Size);
//! assert_eq!(sort.descriptors[0].direction, SortDirection::Descending);
//! assert_eq!(sort.max_count, 5);
//!
//! let err = SortParser.parse(&["bogus=1"]).unwrap_err();
//! assert!(err.to_string().starts_with("Option '--sort' has invalid value 'bogus=1'"));
//! # Ok::<(), lintconf_options::OptionParseError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod flags;
mod max_count;
mod output;
mod parser;
mod paths;
mod pattern;
mod properties;
mod sort;
pub mod token;
pub mod value;
pub mod vocab;

pub use error::{help_name, OptionParseError};
pub use flags::EnumFlagsParser;
pub use max_count::{MaxCountParser, MaxOptions};
pub use output::{OutputOptions, OutputParser};
pub use parser::{parse_char, parse_count, parse_enum, parse_enum_values, OptionParser};
pub use paths::{PathResolver, PathsParser};
pub use pattern::{PatternOptions, PatternParser};
pub use properties::PropertiesParser;
pub use sort::{SortDescriptor, SortDirection, SortOptions, SortParser, SortProperty};
pub use value::{FlagSet, OptionEnum, Provider, ValueProvider};
pub use vocab::{names, OutputFlag, PatternFlag, SearchTarget, SortFlag, TextEncoding, Verbosity};
