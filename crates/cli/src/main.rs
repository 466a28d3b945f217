//! padctl - Xbox 360 HID bridge diagnostics
//!
//! Inspect the synthetic report descriptor, decode and build set-reports,
//! parse native input reports, and run set-report sequences against a
//! facade attached to a configurable virtual peripheral.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::EncodeCommands;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "padctl")]
#[command(about = "Xbox 360 HID bridge diagnostics - descriptor, reports and simulation")]
#[command(version)]
#[command(long_about = "
padctl inspects the HID game pad the bridge presents for an Xbox 360 wired
controller. It can dump the report descriptor, decode and build the rumble
and LED set-reports, parse native input reports, and replay set-reports
against a virtual peripheral.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the HID report descriptor
    Descriptor {
        /// List descriptor items instead of a hex dump
        #[arg(short, long)]
        annotate: bool,
    },

    /// Decode a set-report given as hex
    Decode {
        /// Report bytes, e.g. "00 04 10 20"
        report: String,
    },

    /// Build a set-report
    #[command(subcommand)]
    Encode(EncodeCommands),

    /// Parse a 20-byte native input report given as hex
    Input {
        /// Report bytes
        report: String,
    },

    /// Send set-reports to a facade attached to a virtual peripheral
    Simulate {
        /// Peripheral configuration (.json, .yaml or .yml)
        #[arg(short, long, env = "PADCTL_CONFIG")]
        config: Option<PathBuf>,

        /// Reports to send, in order
        reports: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("padctl={log_level},padbridge_hid={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Descriptor { annotate } => commands::descriptor::execute(*annotate, cli.json),
        Commands::Decode { report } => commands::decode::execute(report, cli.json),
        Commands::Encode(cmd) => commands::encode::execute(cmd, cli.json),
        Commands::Input { report } => commands::input::execute(report, cli.json),
        Commands::Simulate { config, reports } => {
            commands::simulate::execute(config.as_deref(), reports, cli.json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_global_flags() -> TestResult {
        let cli = Cli::try_parse_from(["padctl", "--json", "-vv", "descriptor"])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Descriptor { annotate: false }
        ));
        Ok(())
    }

    #[test]
    fn parse_encode_rumble_hex_args() -> TestResult {
        let cli = Cli::try_parse_from(["padctl", "encode", "rumble", "0x10", "32"])?;
        assert!(matches!(
            cli.command,
            Commands::Encode(EncodeCommands::Rumble {
                left: 0x10,
                right: 32
            })
        ));
        Ok(())
    }

    #[test]
    fn parse_encode_rejects_out_of_range() {
        let result = Cli::try_parse_from(["padctl", "encode", "led", "300"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_simulate_reports() -> TestResult {
        let cli = Cli::try_parse_from([
            "padctl",
            "simulate",
            "--config",
            "pad.yaml",
            "00041020",
            "010306",
        ])?;
        match cli.command {
            Commands::Simulate { config, reports } => {
                assert_eq!(config, Some(PathBuf::from("pad.yaml")));
                assert_eq!(reports, vec!["00041020", "010306"]);
            }
            other => return Err(format!("unexpected command {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
