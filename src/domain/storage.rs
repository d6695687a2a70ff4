use super::DailyRecord;
use crate::error::Result;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn load_daily_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>>;
    /// Replaces whatever was stored for the record's date.
    fn save_daily_record(&self, record: &DailyRecord) -> Result<()>;
    /// Returns `false` when nothing was stored for `date`.
    fn delete_daily_record(&self, date: NaiveDate) -> Result<bool>;
    /// Stored dates, oldest first.
    fn list_dates(&self) -> Result<Vec<NaiveDate>>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const RESULTS_DIR: &'static str = "results";
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";
}
