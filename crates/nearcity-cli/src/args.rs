use clap::{Parser, Subcommand};

/// CLI arguments for nearcity
#[derive(Debug, Parser)]
#[command(
    name = "nearcity",
    version,
    about = "Query the city gazetteer and generate nearby-cities buyer filters"
)]
pub struct CliArgs {
    /// Path to an input dataset (JSON, .json.gz or .bin snapshot); defaults
    /// to the bundled US dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the gazetteer contents
    Stats,

    /// Resolve a city to its coordinates
    Resolve {
        /// City name (a ", County" suffix is tolerated)
        city: String,
        /// Two-letter state code (e.g. TX)
        state: String,
    },

    /// List gazetteer cities within a radius of an origin city
    Nearby {
        city: String,
        state: String,
        /// Radius in miles
        #[arg(short = 'r', long = "radius", default_value_t = 30.0)]
        radius: f64,
    },

    /// Generate a buyer filter artifact and print it as JSON
    Filter {
        city: String,
        state: String,
        /// Radius in miles
        #[arg(short = 'r', long = "radius", default_value_t = 30.0)]
        radius: f64,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Search cities by name substring
    Search {
        /// Substring to search (case-insensitive)
        query: String,
        /// Restrict to a state code
        #[arg(short = 's', long = "state")]
        state: Option<String>,
        #[arg(short = 'l', long = "limit", default_value_t = 10)]
        limit: usize,
    },
}
