//! Altair CLI binary
//!
//! Runs cluster alert probes from the command line: builds a parameter set
//! from flags or a TOML file, executes the probe, prints the verdict, and
//! exits with the conventional monitoring exit code.

#![allow(unused_crate_dependencies)]

use altair_core::probe::{AlertProbe, OozieServerStatusProbe};
use clap::{Parser, Subcommand};
use cli::build_parameters;
use schema::{AlertResult, AlertState};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "altair")]
#[command(about = "Health-check probes for cluster alerting")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level filter
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Oozie server status check
    Check {
        /// Parameter in KEY=VALUE form; may be repeated
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// TOML file with a flat table of parameters
        #[arg(long, value_name = "FILE")]
        params_file: Option<PathBuf>,

        /// Host the alert runs on, used for kerberos principal substitution
        #[arg(long, default_value = "localhost")]
        host_name: String,

        /// Emit the verdict as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration keys the probe requires
    Tokens,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = altair_core::utils::init_tracing(&cli.log_level) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::from(AlertState::Unknown.exit_code());
    }

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(AlertState::Unknown.exit_code())
        }
    }
}

async fn run(command: Commands) -> cli::Result<ExitCode> {
    match command {
        Commands::Tokens => {
            for token in OozieServerStatusProbe::new().tokens() {
                println!("{token}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            params,
            params_file,
            host_name,
            json,
        } => {
            let parameters = build_parameters(params_file.as_deref(), &params)?;
            debug!("Running status check with {} parameters", parameters.len());

            let probe = OozieServerStatusProbe::new();
            let result = probe.execute(Some(&parameters), &host_name).await;

            print_result(&result, json)?;
            Ok(ExitCode::from(result.state.exit_code()))
        }
    }
}

fn print_result(result: &AlertResult, json: bool) -> cli::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        println!("{}: {}", result.state, result.message());
    }
    Ok(())
}
