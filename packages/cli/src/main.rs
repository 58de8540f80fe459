#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the crime dashboard aggregation engine.
//!
//! A minimal presentation-layer stand-in: loads the incident CSV once, then
//! either lists the jurisdiction selector values or runs one aggregation
//! request and prints the result set as JSON for downstream rendering.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use crime_dash_dataset::{ALL_JURISDICTIONS, Dataset};

/// Label printed for a missing top crime type.
const NOT_AVAILABLE: &str = "not available";

#[derive(Parser)]
#[command(name = "crime_dash", about = "Crime dashboard aggregation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the jurisdictions present in a dataset, sentinel first
    Jurisdictions {
        /// Path to the incident CSV file
        csv: PathBuf,
    },
    /// Aggregate a dataset and print the result as JSON
    Aggregate {
        /// Path to the incident CSV file
        csv: PathBuf,
        /// Jurisdiction to filter by (defaults to all jurisdictions)
        #[arg(long, default_value = ALL_JURISDICTIONS)]
        jurisdiction: String,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Jurisdictions { csv } => {
            let dataset = load(&csv)?;
            for jurisdiction in dataset.jurisdictions() {
                println!("{jurisdiction}");
            }
        }
        Commands::Aggregate {
            csv,
            jurisdiction,
            pretty,
        } => {
            let dataset = load(&csv)?;
            let result = crime_dash_analytics::aggregate(&dataset, &jurisdiction)?;

            let top = result
                .top_crime_type
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |t| t.category.clone());
            log::info!(
                "{jurisdiction}: {} incidents, top crime type: {top}",
                result.total_count
            );

            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn load(csv: &Path) -> Result<Dataset, crime_dash_dataset::DatasetError> {
    let dataset = Dataset::from_csv_path(csv)?;
    log::info!(
        "loaded {} records from {}",
        dataset.len(),
        csv.display()
    );
    Ok(dataset)
}
