//! nearcity — Command-line interface for nearcity-core
//!
//! This binary provides a simple way to inspect the bundled city gazetteer
//! and exercise the nearby-cities machinery from your terminal. It supports
//! printing basic statistics, resolving a city to coordinates, listing the
//! cities within a radius, generating a buyer filter artifact as JSON, and
//! searching cities by substring.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ nearcity stats
//!
//! - Resolve a city to coordinates
//!   $ nearcity resolve Houston TX
//!
//! - List cities within 30 miles
//!   $ nearcity nearby Houston TX --radius 30
//!
//! - Emit a buyer filter artifact (the shape stored on buyer profiles)
//!   $ nearcity filter Houston TX --radius 30 --pretty
//!
//! - Search cities by substring
//!   $ nearcity search pear --state TX
//!
//! By default the CLI loads the dataset bundled with `nearcity-core` and
//! caches a binary snapshot next to it for fast subsequent runs. Use
//! `--input <path>` to point at a custom dataset (`.json`, `.json.gz`, or a
//! `.bin` snapshot).

mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use nearcity_core::{DefaultGazetteer, Gazetteer, StandardBackend};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    let gaz: DefaultGazetteer = match &args.input {
        Some(path) => Gazetteer::<StandardBackend>::load_from_path(path)
            .with_context(|| format!("failed to load dataset from {path}"))?,
        None => Gazetteer::<StandardBackend>::load().context("failed to load bundled dataset")?,
    };

    match args.command {
        Commands::Stats => {
            let stats = gaz.stats();
            println!("Gazetteer statistics:");
            println!("  States: {}", stats.states);
            println!("  Cities: {}", stats.cities);
            println!("  Largest states:");
            for (code, count) in gaz.state_city_counts().into_iter().take(10) {
                println!("    {code}: {count}");
            }
        }

        Commands::Resolve { city, state } => match gaz.resolve_city(&city, &state) {
            Some(coords) => {
                println!("{city}, {state}: ({}, {})", coords.lat, coords.lng);
            }
            None => {
                eprintln!("No gazetteer entry for: {city}, {state}");
            }
        },

        Commands::Nearby {
            city,
            state,
            radius,
        } => {
            let hits = gaz.cities_within_radius(&city, &state, radius);
            if hits.is_empty() {
                println!("No cities within {radius} miles of {city}, {state}");
            } else {
                println!("{} cities within {radius} miles of {city}, {state}:", hits.len());
                for hit in hits {
                    println!("  {} — {:.1} mi", hit.name, hit.distance_miles);
                }
            }
        }

        Commands::Filter {
            city,
            state,
            radius,
            pretty,
        } => {
            let filter = gaz.build_buyer_filter(&city, &state, radius);
            let json = if pretty {
                serde_json::to_string_pretty(&filter)?
            } else {
                serde_json::to_string(&filter)?
            };
            println!("{json}");
        }

        Commands::Search {
            query,
            state,
            limit,
        } => {
            let matches = gaz.search_cities(&query, state.as_deref(), limit);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for (city, state) in matches {
                    println!("{} — {}", city.name(), state.code());
                }
            }
        }
    }

    Ok(())
}
