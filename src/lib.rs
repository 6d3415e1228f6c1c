//! timereport library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cli),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
