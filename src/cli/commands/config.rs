use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cli: &Cli) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            Config::print(cli.settings.as_deref())?;
        }

        if *check {
            Config::load(cli.settings.as_deref())?;
            println!("Settings OK");
        }
    }
    Ok(())
}
