use crate::domain::{GameRegistry, RawEntry, ScoreRange};
use thiserror::Error;

/// Why an entry was turned away. `Display` is the message shown to the
/// person entering scores.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("unknown game: {0}")]
    UnknownGame(String),
    #[error("{game} score must be between {range}")]
    OutOfRange { game: String, range: ScoreRange },
    #[error("{game} score must be a whole number between {range}")]
    NotInteger { game: String, range: ScoreRange },
    #[error("{game} score must be a number between {range}, got {value}")]
    NotNumeric {
        game: String,
        range: ScoreRange,
        value: String,
    },
    #[error("{game} guesses must be between 1 and {max}")]
    GuessCount { game: String, max: u32 },
    #[error("{game} distance must be a non-negative number")]
    Distance { game: String },
    #[error("{game} takes a plain score, not a solved/failed outcome")]
    UnexpectedOutcome { game: String },
    #[error("{game} needs a solved/failed outcome or a score of at least 1, got {value}")]
    InvalidOutcome { game: String, value: String },
}

/// Gates a standard game's raw value against its configured range.
///
/// Special games always pass here; their outcome is checked with
/// `SpecialOutcome::validate` before the raw score is derived, and a plain
/// score with `validate_special_raw`.
pub fn validate_input(
    registry: &GameRegistry,
    game: &str,
    value: &RawEntry,
) -> Result<(), ValidationError> {
    let definition = registry
        .get(game)
        .ok_or_else(|| ValidationError::UnknownGame(game.to_string()))?;

    let Some(range) = definition.range() else {
        return Ok(());
    };

    let value = match value {
        RawEntry::Value(value) => *value,
        RawEntry::Malformed(text) => {
            return Err(ValidationError::NotNumeric {
                game: game.to_string(),
                range: *range,
                value: text.clone(),
            })
        }
    };

    if range.integer && value.fract() != 0.0 {
        return Err(ValidationError::NotInteger {
            game: game.to_string(),
            range: *range,
        });
    }

    if !range.contains(value) {
        return Err(ValidationError::OutOfRange {
            game: game.to_string(),
            range: *range,
        });
    }

    Ok(())
}
