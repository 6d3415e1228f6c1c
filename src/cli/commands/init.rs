use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init(cli.settings.as_deref())?;
    println!("Settings template written to {:?}", path);
    println!("Fill in api_key, database_id and list_id before running `report`.");
    Ok(())
}
