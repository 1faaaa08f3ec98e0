//! Options command implementation.

use anyhow::Result;
use lintconf_options::vocab::{SEARCH_TARGETS, VERBOSITY};
use lintconf_options::{
    names, parse_enum, EnumFlagsParser, FlagSet, MaxCountParser, MaxOptions, OptionParseError,
    OptionParser, OutputOptions, OutputParser, PathResolver, PathsParser, PatternOptions,
    PatternParser, PropertiesParser, Provider, SearchTarget, SortOptions, SortParser, Verbosity,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::OutputFormat;

/// Raw token groups, one `Vec` per composite option.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OptionsArgs {
    /// Sort order, e.g. `size descending max-count=5`
    #[arg(long, num_args = 1.., value_name = "TOKEN")]
    pub sort: Vec<String>,

    /// Output file followed by `verbosity=`, `encoding=` or `append`
    #[arg(long, num_args = 1.., value_name = "TOKEN")]
    pub output: Vec<String>,

    /// Limits: a bare count, `matches=` or `matching-files=`
    #[arg(long, num_args = 1.., value_name = "TOKEN")]
    pub max_count: Vec<String>,

    /// Name pattern followed by pattern flags
    #[arg(long, num_args = 1.., value_name = "TOKEN")]
    pub name: Vec<String>,

    /// Content pattern followed by pattern flags
    #[arg(long, num_args = 1.., value_name = "TOKEN")]
    pub content: Vec<String>,

    /// Search targets: `files`, `directories`, `all`
    #[arg(long, num_args = 1.., value_name = "TOKEN")]
    pub target: Vec<String>,

    /// Properties as `NAME=VALUE`
    #[arg(long, num_args = 1.., value_name = "NAME=VALUE")]
    pub property: Vec<String>,

    /// Paths to resolve against the current directory
    #[arg(long, num_args = 1.., value_name = "PATH")]
    pub paths: Vec<String>,

    /// Verbosity: `quiet`, `minimal`, `normal`, `detailed`, `diagnostic`
    #[arg(long, value_name = "VERBOSITY")]
    pub verbosity: Option<String>,
}

/// Every option group, validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsReport {
    /// `--sort`
    pub sort: SortOptions,
    /// `--output`
    pub output: OutputOptions,
    /// `--max-count`
    pub max_count: MaxOptions,
    /// `--name`
    pub name: Option<PatternOptions>,
    /// `--content`
    pub content: Option<PatternOptions>,
    /// `--target`
    pub target: FlagSet<SearchTarget>,
    /// `--property`
    pub property: BTreeMap<String, String>,
    /// `--paths`
    pub paths: Vec<PathBuf>,
    /// `--verbosity`
    pub verbosity: Verbosity,
}

/// Runs the options command.
pub fn run(args: &OptionsArgs, format: OutputFormat) -> Result<()> {
    let report = super::exit_on_option_error(resolve(args, &PathResolver::new()));
    super::output::print_options(&report, format)
}

/// Validates every group in declaration order; the first error wins.
fn resolve(args: &OptionsArgs, resolver: &PathResolver) -> Result<OptionsReport, OptionParseError> {
    Ok(OptionsReport {
        sort: SortParser.parse(&args.sort)?,
        output: OutputParser::new(resolver.clone()).parse(&args.output)?,
        max_count: MaxCountParser.parse(&args.max_count)?,
        name: PatternParser::new(names::NAME).parse(&args.name)?,
        content: PatternParser::new(names::CONTENT).parse(&args.content)?,
        target: EnumFlagsParser::new(names::TARGET, Provider::With(&SEARCH_TARGETS))
            .with_default([SearchTarget::Files])
            .parse(&args.target)?,
        property: PropertiesParser::new(names::PROPERTY).parse(&args.property)?,
        paths: PathsParser::new(names::PATHS, resolver.clone()).parse(&args.paths)?,
        verbosity: match args.verbosity.as_deref() {
            Some(token) => parse_enum(token, names::VERBOSITY, Provider::With(&VERBOSITY))?,
            None => Verbosity::default(),
        },
    })
}
