//! confc - configuration-to-C++ header compiler

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;
use crate::error::Result;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.create {
        commands::run_create(cli)
    } else {
        commands::run_generate(cli)
    }
}
