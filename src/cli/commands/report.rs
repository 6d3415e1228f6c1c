use chrono::{Datelike, Local};

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::summary::regenerate;
use crate::errors::AppResult;
use crate::models::Outcome;
use crate::store::{DocumentStore, NotionStore};

pub fn handle(cmd: &Commands, cli: &Cli) -> AppResult<()> {
    if let Commands::Report {
        companies,
        months,
        years,
    } = cmd
    {
        let cfg = Config::load(cli.settings.as_deref())?;
        let store = NotionStore::new(&cfg)?;

        let today = Local::now().date_naive();
        let months = if months.is_empty() {
            vec![today.month()]
        } else {
            months.clone()
        };
        let years = if years.is_empty() {
            vec![today.year()]
        } else {
            years.clone()
        };

        run_reports(&store, &cfg, companies, &months, &years);
    }
    Ok(())
}

/// One regeneration per (company, year, month) triple, strictly sequential.
/// A store failure aborts only its own triple; the loop moves on.
fn run_reports(
    store: &dyn DocumentStore,
    cfg: &Config,
    companies: &[String],
    months: &[u32],
    years: &[i32],
) {
    for company in companies {
        for year in years {
            for month in months {
                match regenerate(store, cfg, company, *month, *year) {
                    Ok(Outcome::Created(url)) => println!("Created summary: {}", url),
                    Ok(Outcome::NoEntries) => {} // notice already printed
                    Err(e) => eprintln!(
                        "Error: {} ({} {}/{})",
                        e, company, month, year
                    ),
                }
            }
        }
    }
}
