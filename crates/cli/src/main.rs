//! Holocron CLI - Catalog query and diagnostics tools.
//!
//! # Usage
//!
//! ```bash
//! # Print page 2 of the character listing as JSON
//! holo-cli page 2
//!
//! # Search for characters by name
//! holo-cli search "sky"
//!
//! # Print one character with its homeworld joined
//! holo-cli person 1
//!
//! # List the film catalog
//! holo-cli films
//! ```
//!
//! # Commands
//!
//! - `page` - Fetch one enriched page of the character listing
//! - `search` - Search characters by name
//! - `person` - Fetch a single character with homeworld
//! - `films` - List all films

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output goes to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "holo-cli")]
#[command(author, version, about = "Holocron CLI tools")]
struct Cli {
    /// Catalog base URL (defaults to CATALOG_BASE_URL or the public API)
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one page of the character listing, enriched, as JSON
    Page {
        /// 1-based page number
        #[arg(default_value_t = 1)]
        number: u32,
    },
    /// Search characters by name, enriched, as JSON
    Search {
        /// Search query, matched by the upstream catalog
        query: String,
    },
    /// Fetch a single character with its homeworld joined
    Person {
        /// Numeric character id
        id: u64,
    },
    /// List all films in the catalog
    Films,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = commands::client(cli.catalog_url);

    match cli.command {
        Commands::Page { number } => commands::browse::page(&client, number).await?,
        Commands::Search { query } => commands::browse::search(&client, &query).await?,
        Commands::Person { id } => commands::person::show(&client, id).await?,
        Commands::Films => commands::films::list(&client).await?,
    }
    Ok(())
}
