use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the roster and game registry
    #[arg(long, env = "GEORANK_CONFIG", default_value = "scoring_config.json")]
    pub config_file: PathBuf,

    /// Directory holding the stored daily results
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a day's submission and store it, replacing any earlier result
    Submit {
        /// JSON submission file
        file: PathBuf,
        /// Score without storing the result
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the stored result of a day
    Show { date: NaiveDate },
    /// List every stored day with its winners
    History,
    /// Remove the stored result of a day
    Delete { date: NaiveDate },
    /// Compute the raw score of a special game outcome
    #[command(group(ArgGroup::new("outcome").required(true).args(["guesses", "distance"])))]
    Special {
        /// Special game the outcome belongs to
        #[arg(long, default_value = "NoBordle")]
        game: String,
        /// Number of guesses needed to solve it
        #[arg(long)]
        guesses: Option<u32>,
        /// Distance of the final wrong answer
        #[arg(long)]
        distance: Option<f64>,
    },
    /// Check a raw score against a game's valid range
    Validate { game: String, value: String },
}
