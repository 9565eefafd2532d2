use clap::{Parser, Subcommand};

use crate::nutrition::{MATCH_THRESHOLD, SUGGESTION_LIMIT};

/// Prenatal nutrition: compare what you ate against pregnancy dietary needs.
#[derive(Parser, Debug)]
#[command(name = "prenatal-nutrition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food composition catalog (.csv or .json).
    #[arg(short, long, default_value = "food_catalog.csv", global = true)]
    pub catalog: String,

    /// Lowest similarity score (0-100) accepted as a food match.
    #[arg(long, default_value_t = MATCH_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100), global = true)]
    pub min_score: u8,

    /// Increase log detail (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Add foods interactively, then compute the nutrient gap.
    #[default]
    Session,

    /// Compute the nutrient gap for a list of foods in one go.
    Report {
        /// Food name; repeat for each food eaten.
        #[arg(short, long = "food", required = true)]
        foods: Vec<String>,

        /// Age bracket: 1 = 16-18, 2 = 19-29, 3 = 30-49.
        #[arg(short, long)]
        age: u8,

        /// Trimester: 1, 2 or 3.
        #[arg(short, long)]
        trimester: u8,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the catalog names closest to a query.
    Search {
        query: String,

        /// Number of candidates to list.
        #[arg(short, long, default_value_t = SUGGESTION_LIMIT)]
        limit: usize,
    },

    /// Print the requirement table.
    Requirements {
        /// Only this age bracket (1-3).
        #[arg(short, long)]
        age: Option<u8>,

        /// Only this trimester (1-3).
        #[arg(short, long)]
        trimester: Option<u8>,
    },
}
