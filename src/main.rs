//! Carlot CLI - car-listings catalog over a local SQLite database

use std::path::PathBuf;

use carlot::{commands, config};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "carlot")]
#[command(version)]
#[command(about = "Local car-listings catalog with inline edit and delete")]
#[command(long_about = r#"
Carlot keeps a single-table catalog of car listings (brand, price) in a local
SQLite database and renders it as a table after every change.

Example usage:
  carlot add Honda 25000
  carlot list
  carlot set 1 price "27 500"
  carlot delete 1
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the catalog database (overrides carlot.toml)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the catalog table
    List {
        /// Emit records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a listing
    Add {
        /// Car brand
        brand: String,

        /// Price; grouping characters are accepted and stripped
        price: String,
    },

    /// Edit one field of a listing
    Set {
        /// Record id
        id: i64,

        /// Field to change: brand or price
        field: String,

        /// New value
        value: String,
    },

    /// Delete a listing
    Delete {
        /// Record id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show catalog statistics
    Stats,

    /// Write a default carlot.toml
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let database = config::resolve_database(cli.database)?;

    match cli.command {
        Commands::List { json } => commands::run_list(database, json),
        Commands::Add { brand, price } => commands::run_add(database, &brand, &price),
        Commands::Set { id, field, value } => commands::run_set(database, id, &field, &value),
        Commands::Delete { id, yes } => commands::run_delete(database, id, yes),
        Commands::Stats => commands::run_stats(database),
        Commands::Init { force } => commands::run_init(force),
    }
}
