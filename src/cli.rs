use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "fixture-guard")]
#[command(author, version, about = "Accessibility fixture guard - keep broken fixtures broken")]
#[command(long_about = "Guards intentionally broken HTML accessibility fixtures against \
    well-meaning fixes.\n\n\
    Exit codes:\n  \
    0 - All registered fixtures found and readable\n  \
    1 - A fixture is missing or unreadable (or a warning under --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check registered fixtures for their known accessibility defects
    Check(CheckArgs),

    /// List registered fixtures, minimums, and exclusions
    List(ListArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Directory containing the fixture files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".fixture-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file (default: .fixture-guard.toml)
        #[arg(short, long, default_value = ".fixture-guard.toml")]
        config: PathBuf,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
