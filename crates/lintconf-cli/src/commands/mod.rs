//! Subcommand implementations.

pub mod init;
pub mod list_rules;
pub mod options;
pub mod output;
pub mod rules;

use lintconf_options::OptionParseError;

/// Unwraps a parse result, or renders the error as a diagnostic and exits
/// with status 2.
pub fn exit_on_option_error<T>(result: Result<T, OptionParseError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(2);
        }
    }
}
