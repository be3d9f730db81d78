mod cli;
mod commands;
mod error;
mod summary;

use clap::Parser;
use cli::{Cli, Command};
use error::CliResult;
use metaschema_config::Config;
use std::{io, process::ExitCode};
use tracing_subscriber::EnvFilter;

// Quiet unless --verbose; RUST_LOG refines the verbose filter.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    tracing::debug!(?config, "configuration loaded");

    let mut out = io::stdout().lock();

    match cli.command {
        Command::Compile { rows, strict } => {
            let rows = commands::read_rows(&rows)?;
            commands::compile(&mut out, &config, cli.format, &rows, strict)
        }
        Command::Check { rows } => {
            let rows = commands::read_rows(&rows)?;
            commands::check(&mut out, &config, cli.format, &rows)
        }
        Command::Junctions { rows } => {
            let rows = commands::read_rows(&rows)?;
            commands::list_junctions(&mut out, &config, cli.format, &rows)
        }
    }
}
