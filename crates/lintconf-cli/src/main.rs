//! lintconf CLI tool.
//!
//! Usage:
//! ```bash
//! lintconf rules [IDS]... [--override ID=SEV]...
//! lintconf list-rules
//! lintconf options --sort size descending max-count=5
//! lintconf init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Layered rule configuration and composite option validation
#[derive(Parser)]
#[command(name = "lintconf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Rule-set file to load on top of discovered ones (repeatable)
    #[arg(short, long, global = true, value_name = "PATH")]
    ruleset: Vec<PathBuf>,

    /// Project directory searched for lintconf.toml
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how rules resolve against the loaded rule sets
    Rules {
        /// Rule ids to resolve (default: every id the configuration knows)
        ids: Vec<String>,

        /// Severity reported for rules nothing configures
        #[arg(long, default_value = "warning")]
        default_severity: String,

        /// Per-compilation override, e.g. STYLE01=suppress (repeatable)
        #[arg(long = "override", value_name = "ID=SEV")]
        overrides: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List built-in code-style rules
    ListRules,

    /// Validate composite options and print the resolved values
    Options {
        #[command(flatten)]
        args: commands::options::OptionsArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize a rule-set file
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One line per entry.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Rules {
            ids,
            default_severity,
            overrides,
            format,
        } => {
            let sources = config_resolver::resolve(&cli.project, &cli.ruleset);
            commands::rules::run(&sources, &ids, &default_severity, &overrides, format)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Options { args, format } => commands::options::run(&args, format),
        Commands::Init { force } => commands::init::run(&cli.project, force),
    }
}
