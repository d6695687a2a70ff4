mod game;
mod player;
mod record;
mod result;
mod score;
mod submission;
pub(crate) mod storage;

pub use game::{Game, GameKind, GameRegistry, ScoreRange};
pub use player::Roster;
pub use record::DailyRecord;
pub use result::{DailyResult, GameScores, Standing};
pub use score::{RawEntry, Slot, SpecialOutcome};
pub use submission::{Submission, SubmittedScore};
pub use storage::{Storage, StorageKeys};
