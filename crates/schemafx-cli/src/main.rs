//! # schemafx CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use schemafx_cli::check::{run_check, CheckArgs};
use schemafx_cli::messages::run_messages;
use schemafx_cli::validate::{run_validate, ValidateArgs};
use schemafx_cli::EngineArgs;

/// Schema test runner: well-formedness checks and expected-error
/// assertions over JSON Schema files, reported in TAP.
#[derive(Parser, Debug)]
#[command(name = "schemafx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that every schema in the given directories or bundles is well-formed.
    Check(CheckArgs),

    /// Validate a document against a schema, optionally asserting the expected errors.
    Validate(ValidateArgs),

    /// Print the message catalog as JSON.
    Messages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(engine = ?cli.engine, "schemafx starting");

    let result = match &cli.command {
        Commands::Check(args) => run_check(args, &cli.engine),
        Commands::Validate(args) => run_validate(args, &cli.engine),
        Commands::Messages => run_messages(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemafx_schema::Draft;

    #[test]
    fn cli_parse_check_paths() {
        let cli = Cli::try_parse_from(["schemafx", "check", "schemas", "bundle.json"]).unwrap();
        match cli.command {
            Commands::Check(args) => assert_eq!(args.paths.len(), 2),
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn cli_check_requires_a_path() {
        assert!(Cli::try_parse_from(["schemafx", "check"]).is_err());
    }

    #[test]
    fn cli_parse_validate_with_expect() {
        let cli = Cli::try_parse_from([
            "schemafx",
            "validate",
            "--schema",
            "nic.json",
            "input.json",
            "--expect",
            "errors.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.schema.to_str(), Some("nic.json"));
                assert_eq!(args.input.to_str(), Some("input.json"));
                assert!(args.expect.is_some());
            }
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn cli_global_engine_flags() {
        let cli = Cli::try_parse_from([
            "schemafx",
            "-vv",
            "messages",
            "--draft",
            "7",
            "--validate-formats",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.engine.draft, Some(Draft::Draft7));
        assert!(cli.engine.validate_formats);
        assert!(matches!(cli.command, Commands::Messages));
    }

    #[test]
    fn cli_rejects_unknown_draft() {
        assert!(Cli::try_parse_from(["schemafx", "--draft", "3", "messages"]).is_err());
    }
}
