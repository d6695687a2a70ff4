use super::score::{RawEntry, SpecialOutcome};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry as typed in: a solved/failed outcome for special games, a
/// plain score for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedScore {
    Special(SpecialOutcome),
    Raw(RawEntry),
}

/// A day's scores, each game column following roster order. `null` marks a
/// player who sat the game out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub date: NaiveDate,
    pub scores: BTreeMap<String, Vec<Option<SubmittedScore>>>,
}
