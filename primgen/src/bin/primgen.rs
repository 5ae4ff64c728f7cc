use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use primgen::cli::{Cli, Commands};
use primgen::commands::{describe, files, generate};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate { roots } => generate(&roots).map(|_| ()),
        Commands::Files {
            roots,
            inputs,
            outputs,
        } => files(&roots, inputs, outputs, &mut io::stdout().lock()),
        Commands::Describe { kind, json } => {
            describe(kind.as_deref(), json, &mut io::stdout().lock())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
