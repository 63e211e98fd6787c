use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use dcaplan::core::log::init_logging;
use dcaplan::core::portfolio::Country;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for dcaplan::AppCommand {
    fn from(cmd: Commands) -> dcaplan::AppCommand {
        match cmd {
            Commands::Save { path, index } => dcaplan::AppCommand::Save { path, index },
            Commands::List => dcaplan::AppCommand::List,
            Commands::Show { index } => dcaplan::AppCommand::Show { index },
            Commands::Delete { index } => dcaplan::AppCommand::Delete { index },
            Commands::Compare { indices } => dcaplan::AppCommand::Compare { indices },
            Commands::Holiday(HolidayCommands::Add {
                country,
                date,
                year,
            }) => dcaplan::AppCommand::HolidayAdd {
                country,
                date,
                year,
            },
            Commands::Holiday(HolidayCommands::List { country, year }) => {
                dcaplan::AppCommand::HolidayList { country, year }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Save or update a portfolio from a YAML definition file
    Save {
        /// Path to the portfolio definition
        path: String,
        /// Overwrite the saved portfolio at this index instead of appending
        #[arg(short, long)]
        index: Option<usize>,
    },
    /// List saved portfolios
    List,
    /// Show the investment plan for one saved portfolio
    Show { index: usize },
    /// Delete a saved portfolio
    Delete { index: usize },
    /// Compare saved portfolios side by side
    Compare {
        /// Indices of the portfolios to compare; repeating an index toggles
        /// it back out of the selection
        #[arg(required = true)]
        indices: Vec<usize>,
    },
    /// Manage extra market holidays
    #[command(subcommand)]
    Holiday(HolidayCommands),
}

#[derive(Subcommand)]
enum HolidayCommands {
    /// Register an extra holiday (KR or US)
    Add {
        country: Country,
        /// Holiday date, YYYY-MM-DD
        date: String,
        /// Year scope; defaults to the date's own year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// List the effective holiday set for a country
    List {
        country: Country,
        /// Defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => dcaplan::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = dcaplan::core::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
# Location of the portfolio store. Defaults to the platform data directory.
data_path: ~
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
