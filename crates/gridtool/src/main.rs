#![warn(missing_docs)]

//! Entry point for the `gridtool` binary.

mod cli;
mod error;
mod place;
mod probe;
mod scenario;

use std::process;

use clap::Parser;
use tracing::error;

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    logging::init(&log);

    match command {
        Commands::Place(args) => place::run(&args),
        Commands::Probe(args) => probe::run(&args),
    }
}
