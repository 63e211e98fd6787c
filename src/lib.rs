pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::holidays::HolidayRegistry;
use crate::core::portfolio::Country;
use crate::store::KeyValue;
use crate::store::disk::DiskStore;
use crate::store::portfolios::PortfolioStore;
use anyhow::Result;
use chrono::{Datelike, Local};
use std::sync::Arc;
use tracing::{debug, info};

/// Commands the application can execute, decoupled from the CLI parser.
pub enum AppCommand {
    Save { path: String, index: Option<usize> },
    List,
    Show { index: usize },
    Delete { index: usize },
    Compare { indices: Vec<usize> },
    HolidayAdd {
        country: Country,
        date: String,
        year: Option<i32>,
    },
    HolidayList {
        country: Country,
        year: Option<i32>,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Portfolio planner starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let data_path = config.data_path()?;
    let store: Arc<dyn KeyValue> = Arc::new(DiskStore::open(&data_path)?);
    run_with_store(command, store)
}

/// Runs a command against an already-open store. Entry point for tests and
/// embedding; `run_command` wires up the durable store first.
pub fn run_with_store(command: AppCommand, store: Arc<dyn KeyValue>) -> Result<()> {
    let registry = HolidayRegistry::new(Arc::clone(&store));

    // Initialize the current year's extra-holiday entries up front, before
    // any command reads them. Idempotent across invocations.
    let year = Local::now().year();
    for country in Country::ALL {
        registry.ensure_year(country, year);
    }

    let portfolios = PortfolioStore::new(Arc::clone(&store));

    match command {
        AppCommand::Save { path, index } => cli::save::run(&portfolios, &path, index),
        AppCommand::List => cli::list::run(&portfolios),
        AppCommand::Show { index } => cli::show::run(&portfolios, &registry, index),
        AppCommand::Delete { index } => {
            let count = portfolios.list().len();
            portfolios.delete(index);
            if index < count {
                println!("Deleted portfolio at index {index}");
            } else {
                println!("No portfolio at index {index}, nothing deleted");
            }
            Ok(())
        }
        AppCommand::Compare { indices } => cli::compare::run(&portfolios, &registry, &indices),
        AppCommand::HolidayAdd {
            country,
            date,
            year,
        } => cli::holiday::add(&registry, country, &date, year),
        AppCommand::HolidayList { country, year } => cli::holiday::list(&registry, country, year),
    }
}
