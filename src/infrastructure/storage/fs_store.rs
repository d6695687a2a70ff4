use crate::domain::{DailyRecord, Storage, StorageKeys};
use crate::error::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores one pretty-printed JSON document per day under
/// `<data_dir>/results/YYYY-MM-DD.json`.
#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn results_dir(&self) -> PathBuf {
        self.data_dir.join(StorageKeys::RESULTS_DIR)
    }

    fn get_path_for_date(&self, date: NaiveDate) -> PathBuf {
        self.results_dir()
            .join(format!("{}.json", date.format(StorageKeys::DATE_FORMAT)))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        let content = serde_json::to_string_pretty(data)?;
        // Atomic replace.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn load_daily_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        self.read_json_file(&self.get_path_for_date(date))
    }

    fn save_daily_record(&self, record: &DailyRecord) -> Result<()> {
        let path = self.get_path_for_date(record.date);
        if path.exists() {
            info!("Overwriting stored results for {}", record.date);
        }
        self.write_json_file(&path, record)
    }

    fn delete_daily_record(&self, date: NaiveDate) -> Result<bool> {
        let path = self.get_path_for_date(date);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path)?;
        Ok(true)
    }

    fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let dir = self.results_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
            match NaiveDate::parse_from_str(stem, StorageKeys::DATE_FORMAT) {
                Ok(date) => dates.push(date),
                Err(_) => debug!("Ignoring stray file {}", path.display()),
            }
        }

        dates.sort();
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DailyResult;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(day: &str, winner: &str) -> DailyRecord {
        DailyRecord::new(
            date(day),
            DailyResult {
                winners: vec![winner.to_string()],
                ..Default::default()
            },
        )
    }

    #[test]
    fn saves_and_loads_by_date() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemStore::new(dir.path());

        store.save_daily_record(&record("2025-03-01", "Cole")).unwrap();

        let loaded = store.load_daily_record(date("2025-03-01")).unwrap().unwrap();
        assert_eq!(loaded.result.winners, vec!["Cole".to_string()]);
        assert!(store.load_daily_record(date("2025-03-02")).unwrap().is_none());
    }

    #[test]
    fn saving_same_date_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemStore::new(dir.path());

        store.save_daily_record(&record("2025-03-01", "Cole")).unwrap();
        store.save_daily_record(&record("2025-03-01", "Joseph")).unwrap();

        let loaded = store.load_daily_record(date("2025-03-01")).unwrap().unwrap();
        assert_eq!(loaded.result.winners, vec!["Joseph".to_string()]);
        assert_eq!(store.list_dates().unwrap().len(), 1);
    }

    #[test]
    fn lists_dates_oldest_first_and_ignores_strays() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemStore::new(dir.path());

        store.save_daily_record(&record("2025-03-02", "Cole")).unwrap();
        store.save_daily_record(&record("2025-02-28", "Cole")).unwrap();
        fs::write(dir.path().join("results").join("notes.json"), "{}").unwrap();

        assert_eq!(
            store.list_dates().unwrap(),
            vec![date("2025-02-28"), date("2025-03-02")]
        );
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemStore::new(dir.path());

        store.save_daily_record(&record("2025-03-01", "Cole")).unwrap();

        assert!(store.delete_daily_record(date("2025-03-01")).unwrap());
        assert!(!store.delete_daily_record(date("2025-03-01")).unwrap());
        assert!(store.list_dates().unwrap().is_empty());
    }

    #[test]
    fn empty_store_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let store = FileSystemStore::new(dir.path().join("missing"));
        assert!(store.list_dates().unwrap().is_empty());
    }
}
