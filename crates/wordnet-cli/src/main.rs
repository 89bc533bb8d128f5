mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the verbosity
/// flags when set.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let format = cli.format;
    let max_file_size = cli.max_file_size;

    match &cli.command {
        Command::Sap { digraph, queries } => {
            cmd::sap::run(digraph, queries.as_ref(), format, max_file_size)
        }
        Command::Distance {
            synsets,
            hypernyms,
            queries,
        } => cmd::distance::run(synsets, hypernyms, queries.as_ref(), format, max_file_size),
        Command::Nouns { synsets, hypernyms } => {
            cmd::nouns::run(synsets, hypernyms, format, max_file_size)
        }
        Command::Inspect { synsets, hypernyms } => {
            cmd::inspect::run(synsets, hypernyms, format, max_file_size)
        }
        Command::Outcast {
            synsets,
            hypernyms,
            nouns,
        } => cmd::outcast::run(synsets, hypernyms, nouns, format, max_file_size),
    }
}
