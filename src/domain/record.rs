use crate::domain::DailyResult;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// What gets persisted for a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub recorded_at: DateTime<Local>,
    pub version: String,
    pub result: DailyResult,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, result: DailyResult) -> Self {
        Self {
            date,
            recorded_at: Local::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            result,
        }
    }
}
