//! Shindan Checker - car diagnostics from the command line
//!
//! Classifies charging-system voltage readings and projects the next oil
//! change from mileage and maintenance logs.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
