//! Daily rankings for a fixed group of players across geography guessing
//! games with unrelated score scales.
//!
//! Raw results are normalized per game against the day's median, weighted,
//! summed per player and ranked, lowest total first.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;

use crate::config::ScoringConfig;
use crate::domain::{DailyResult, Slot};
use std::collections::BTreeMap;

pub use crate::error::{Result, ScoreError};
pub use crate::services::{compute_special_raw, validate_input, ValidationError};

/// Scores one day. Columns in `scores_by_game` follow roster order.
pub fn compute_daily_result(
    config: &ScoringConfig,
    scores_by_game: &BTreeMap<String, Vec<Slot>>,
) -> DailyResult {
    services::ScoringEngine::new(config).compute_daily_result(scores_by_game)
}
