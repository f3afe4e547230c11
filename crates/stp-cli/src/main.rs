//! Skip-trace preprocessor CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use stp_cli::logging::{LogConfig, LogFormat, init_logging};
use stp_cli::settings::load_settings;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_clean, run_resolve, run_send};
use crate::types::{CleanResult, SendResult};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    match &cli.command {
        Command::Resolve(args) => run_resolve(args, &settings),
        Command::Clean(args) => {
            let result = run_clean(args, &settings)?;
            print_clean_result(&result);
            Ok(())
        }
        Command::Send(args) => {
            let result = run_send(args, &settings)?;
            print_send_result(&result);
            Ok(())
        }
    }
}

fn print_clean_result(result: &CleanResult) {
    println!("Input: {} ({} rows)", result.input.display(), result.input_rows);
    match &result.output {
        Some(path) => println!("Output: {} ({} rows)", path.display(), result.output_rows),
        None => println!("Dry run: {} rows, nothing written", result.output_rows),
    }
    if let Some(run) = &result.run {
        println!("Skip trace started: {}", run.status_url);
    }
}

fn print_send_result(result: &SendResult) {
    println!("Sent: {} ({} bytes)", result.input.display(), result.bytes);
    if let Some(id) = &result.run.run_id {
        println!("Run: {id}");
    }
    println!("Skip trace started: {}", result.run.status_url);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    }
    .with_timestamps(cli.log_timestamps);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn timestamps_flag_reaches_log_config() {
        let cli = parse(&["skiptrace-prep", "--log-timestamps", "resolve", "in.csv"]);
        assert!(log_config_from_cli(&cli).with_timestamps);

        let cli = parse(&["skiptrace-prep", "resolve", "in.csv"]);
        assert!(!log_config_from_cli(&cli).with_timestamps);
    }

    #[test]
    fn explicit_level_disables_env_filter() {
        let cli = parse(&["skiptrace-prep", "clean", "in.csv", "--log-level", "debug"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(config.directives().contains("stp_transform=debug"));
    }
}
