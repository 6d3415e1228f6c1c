use clap::{Parser, Subcommand};

/// Command-line interface definition for timereport
/// CLI application to regenerate monthly time summaries in a Notion workspace
#[derive(Parser)]
#[command(
    name = "timereport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Regenerate monthly time-tracking summary pages in a Notion workspace",
    long_about = None
)]
pub struct Cli {
    /// Override settings file path (useful for tests or custom setups)
    #[arg(global = true, long = "settings", alias = "config")]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a settings file template
    Init,

    /// Manage the settings file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current settings file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the settings file for missing fields")]
        check: bool,
    },

    /// Regenerate summary pages for companies and months
    Report {
        /// Company to report on (repeatable)
        #[arg(long = "company", required = true)]
        companies: Vec<String>,

        /// Report month 1-12 (repeatable, default: current month)
        #[arg(long = "month", value_parser = clap::value_parser!(u32).range(1..=12))]
        months: Vec<u32>,

        /// Report year (repeatable, default: current year)
        #[arg(long = "year")]
        years: Vec<i32>,
    },
}
