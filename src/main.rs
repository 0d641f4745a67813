//! chart-supplements command line.
//!
//! Prints JSON for supplement listings and cycle information. Configuration
//! comes from `CHART_SUPPLEMENTS__*` environment variables (and `.env`).

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chart_supplements::config::{AppConfig, LoggingConfig};
use chart_supplements::{ChartSupplements, CycleLabel, LookupOptions};

#[derive(Parser)]
#[command(name = "chart-supplements")]
#[command(about = "Look up aeronautical chart supplements by airport identifier", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supplement documents for one or more ICAO codes
    List {
        /// Airport identifiers, e.g. PANC PADK
        #[arg(required = true)]
        icaos: Vec<String>,

        /// Query the Next cycle when it is published
        #[arg(long)]
        next: bool,
    },

    /// Show the selector entry of a cycle
    Cycle {
        /// "current" or "next"
        #[arg(default_value = "current")]
        label: String,
    },

    /// Show the code of a cycle
    CycleCode {
        /// "current" or "next"
        #[arg(default_value = "current")]
        label: String,
    },

    /// Show the effective dates of a cycle
    Dates {
        /// "current" or "next"
        #[arg(default_value = "current")]
        label: String,
    },
}

fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter: EnvFilter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| e.to_string().into())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let client = ChartSupplements::from_config(&config)?;

    match cli.command {
        Commands::List { icaos, next } => {
            let options = LookupOptions {
                get_next_cycle: next || config.lookup.get_next_cycle,
            };
            let response = if icaos.len() == 1 {
                client.list(icaos[0].as_str(), options).await?
            } else {
                client.list(icaos, options).await?
            };
            print_json(&response)
        }
        Commands::Cycle { label } => {
            let cycle = client.fetch_cycle(CycleLabel::from_label_or_default(&label)).await?;
            print_json(&cycle)
        }
        Commands::CycleCode { label } => {
            let code = match CycleLabel::from_label_or_default(&label) {
                CycleLabel::Current => client.fetch_current_cycle_code().await?,
                CycleLabel::Next => client.fetch_next_cycle_code().await?,
            };
            print_json(&code)
        }
        Commands::Dates { label } => {
            let dates = match CycleLabel::from_label_or_default(&label) {
                CycleLabel::Current => client.current_cycle_effective_dates().await?,
                label => client.get_cycle_effective_dates(label).await?,
            };
            print_json(&dates)
        }
    }
}
