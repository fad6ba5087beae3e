//! LDM Checker - loading-meter and vehicle fit checks for transport orders
//!
//! A CLI tool that evaluates extracted transport orders against the bus,
//! solo truck and semi-trailer profiles.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
