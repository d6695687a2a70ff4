use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Submission rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),
    #[error("Nobody participated, nothing to record")]
    NoParticipants,
    #[error("No results stored for {0}")]
    NotFound(NaiveDate),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
