use crate::config::ScoringConfig;
use crate::domain::{DailyRecord, DailyResult, RawEntry, Slot, Storage, Submission, SubmittedScore};
use crate::error::{Result, ScoreError};
use crate::services::scoring::ScoringEngine;
use crate::services::special::validate_special_raw;
use crate::services::validation::{validate_input, ValidationError};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Input collection and persistence around the scoring engine.
pub struct ResultsService {
    config: ScoringConfig,
    store: Arc<dyn Storage>,
}

impl ResultsService {
    pub fn new(config: ScoringConfig, store: Arc<dyn Storage + 'static>) -> Self {
        info!("Created new Results service");
        Self { config, store }
    }

    /// Checks every entry and turns special outcomes into raw scores.
    ///
    /// All rejections are collected so the whole form can be fixed at once.
    /// Games missing from the registry are not rejected; their column is
    /// forwarded empty and the engine reports them as skipped.
    pub fn prepare(&self, submission: &Submission) -> Result<BTreeMap<String, Vec<Slot>>> {
        let mut rejections = Vec::new();
        let mut columns = BTreeMap::new();

        for (game, entries) in &submission.scores {
            let known = self.config.games.get(game).is_some();
            if !known {
                warn!("Submission for {} contains unknown game {}", submission.date, game);
            }

            let column: Vec<Slot> = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let entry = entry.as_ref()?;
                    match self.prepare_entry(game, entry) {
                        Ok(raw) => Some(raw),
                        Err(err) if known => {
                            let player = self.config.players.name(index).unwrap_or("?");
                            rejections.push(format!("{}: {}", player, err));
                            None
                        }
                        // Unknown game, the engine drops the column anyway.
                        Err(_) => None,
                    }
                })
                .collect();

            columns.insert(game.clone(), column);
        }

        if !rejections.is_empty() {
            return Err(ScoreError::Rejected(rejections));
        }
        Ok(columns)
    }

    fn prepare_entry(
        &self,
        game: &str,
        entry: &SubmittedScore,
    ) -> std::result::Result<RawEntry, ValidationError> {
        let definition = self
            .config
            .games
            .get(game)
            .ok_or_else(|| ValidationError::UnknownGame(game.to_string()))?;

        match entry {
            SubmittedScore::Special(outcome) if definition.is_special() => {
                outcome.validate(game)?;
                Ok(RawEntry::Value(outcome.raw_score()))
            }
            SubmittedScore::Special(_) => Err(ValidationError::UnexpectedOutcome {
                game: game.to_string(),
            }),
            SubmittedScore::Raw(raw) if definition.is_special() => {
                validate_special_raw(game, raw)?;
                Ok(raw.clone())
            }
            SubmittedScore::Raw(raw) => {
                validate_input(&self.config.games, game, raw)?;
                Ok(raw.clone())
            }
        }
    }

    pub fn score(&self, submission: &Submission) -> Result<DailyResult> {
        let columns = self.prepare(submission)?;
        Ok(ScoringEngine::new(&self.config).compute_daily_result(&columns))
    }

    /// Scores the submission and stores it under its date, replacing any
    /// earlier result for that day.
    pub fn submit(&self, submission: &Submission) -> Result<DailyRecord> {
        let result = self.score(submission)?;
        if !result.has_result() {
            return Err(ScoreError::NoParticipants);
        }

        let record = DailyRecord::new(submission.date, result);
        self.store.save_daily_record(&record)?;

        info!(
            "Stored results for {}: {}",
            record.date,
            record.result.headline()
        );
        Ok(record)
    }

    pub fn exists(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.store.load_daily_record(date)?.is_some())
    }

    pub fn load(&self, date: NaiveDate) -> Result<DailyRecord> {
        self.store
            .load_daily_record(date)?
            .ok_or(ScoreError::NotFound(date))
    }

    /// Every stored day, oldest first.
    pub fn history(&self) -> Result<Vec<DailyRecord>> {
        let mut records = Vec::new();
        for date in self.store.list_dates()? {
            match self.store.load_daily_record(date)? {
                Some(record) => records.push(record),
                None => warn!("Results for {} vanished while listing", date),
            }
        }
        Ok(records)
    }

    pub fn delete(&self, date: NaiveDate) -> Result<()> {
        if !self.store.delete_daily_record(date)? {
            return Err(ScoreError::NotFound(date));
        }

        info!("Deleted results for {}", date);
        Ok(())
    }
}
