//! CLI argument definitions for the skip-trace preprocessor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use stp_transform::DEFAULT_PREVIEW_ROWS;

#[derive(Parser)]
#[command(
    name = "skiptrace-prep",
    version,
    about = "Skip-trace preprocessor - clean property records for skip tracing",
    long_about = "Find owner name and mailing address columns in a property-records CSV,\n\
                  combine them into OWNER NAME and MAILING ADDRESS, and optionally\n\
                  submit the cleaned file to a skip-tracing actor."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include owner names and addresses in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show which input column each role resolves to.
    Resolve(ResolveArgs),

    /// Build OWNER NAME and MAILING ADDRESS and write the cleaned CSV.
    Clean(CleanArgs),

    /// Submit an already cleaned CSV to the skip-tracing actor.
    Send(SendArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Property-records CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Print the mapping as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Property-records CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output file (default: Cleaned_For_SkipTrace.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of cleaned rows to preview (0 disables the preview).
    #[arg(long = "preview", value_name = "N", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview: usize,

    /// Submit the cleaned file to the skip-tracing actor.
    #[arg(long = "send")]
    pub send: bool,

    /// Resolve and preview without writing or sending anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SendArgs {
    /// Cleaned CSV produced by `clean`.
    #[arg(value_name = "CLEANED_CSV")]
    pub input: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
