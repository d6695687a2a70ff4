use crate::domain::{Game, GameRegistry, RawEntry, SpecialOutcome};
use crate::services::validation::ValidationError;

/// Most guesses that still count as solving the puzzle.
pub const MAX_SCORED_GUESSES: f64 = 6.0;
/// Score of a failure at zero distance.
pub const FAILURE_BASE: f64 = 8.0;
/// Distance at which the failure penalty doubles.
pub const DISTANCE_SCALE: f64 = 12_500.0;
pub const MAX_GUESSES: u32 = 20;
/// Lowest raw score an outcome can produce (solved in one guess).
pub const MIN_RAW_SCORE: f64 = 1.0;

/// Converts a solved/failed outcome into a lower-is-better raw score.
///
/// Solving within six guesses scores the guess count. Anything else,
/// including solving late, scores `8 * (1 + sqrt(distance / 12500))`, where
/// the distance is zero for a late solve.
pub fn compute_special_raw(succeeded: bool, measurement: f64) -> f64 {
    if succeeded && measurement <= MAX_SCORED_GUESSES {
        return measurement;
    }

    let distance = if succeeded { 0.0 } else { measurement };
    FAILURE_BASE * (1.0 + (distance / DISTANCE_SCALE).sqrt())
}

impl SpecialOutcome {
    pub fn raw_score(&self) -> f64 {
        match *self {
            SpecialOutcome::Solved { guesses } => compute_special_raw(true, f64::from(guesses)),
            SpecialOutcome::Failed { distance } => compute_special_raw(false, distance),
        }
    }

    /// Domain check done by the input layer before `raw_score` is trusted.
    pub fn validate(&self, game: &str) -> Result<(), ValidationError> {
        match *self {
            SpecialOutcome::Solved { guesses } if !(1..=MAX_GUESSES).contains(&guesses) => {
                Err(ValidationError::GuessCount {
                    game: game.to_string(),
                    max: MAX_GUESSES,
                })
            }
            SpecialOutcome::Failed { distance } if !distance.is_finite() || distance < 0.0 => {
                Err(ValidationError::Distance {
                    game: game.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Looks up a game that takes solved/failed outcomes.
pub fn special_game<'a>(
    registry: &'a GameRegistry,
    game: &str,
) -> Result<&'a Game, ValidationError> {
    let definition = registry
        .get(game)
        .ok_or_else(|| ValidationError::UnknownGame(game.to_string()))?;

    if !definition.is_special() {
        return Err(ValidationError::UnexpectedOutcome {
            game: game.to_string(),
        });
    }
    Ok(definition)
}

/// Checks a special game entry given as a plain raw score instead of an
/// outcome. Anything that is not a finite score an outcome could produce
/// is turned away.
pub fn validate_special_raw(game: &str, entry: &RawEntry) -> Result<(), ValidationError> {
    match entry {
        RawEntry::Value(value) if value.is_finite() && *value >= MIN_RAW_SCORE => Ok(()),
        RawEntry::Value(value) => Err(ValidationError::InvalidOutcome {
            game: game.to_string(),
            value: value.to_string(),
        }),
        RawEntry::Malformed(text) => Err(ValidationError::InvalidOutcome {
            game: game.to_string(),
            value: text.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_guesses_scores_six() {
        assert_eq!(compute_special_raw(true, 6.0), 6.0);
        assert_eq!(compute_special_raw(true, 1.0), 1.0);
    }

    #[test]
    fn seven_guesses_scores_like_zero_distance_failure() {
        assert_eq!(compute_special_raw(true, 7.0), 8.0);
        assert_eq!(compute_special_raw(true, 20.0), 8.0);
        assert_eq!(compute_special_raw(false, 0.0), 8.0);
    }

    #[test]
    fn failure_penalty_grows_with_distance() {
        assert_eq!(compute_special_raw(false, 12_500.0), 16.0);
        assert_eq!(compute_special_raw(false, 50_000.0), 24.0);

        let near = compute_special_raw(false, 100.0);
        let far = compute_special_raw(false, 1_000.0);
        assert!(near > 8.0 && near < far);
    }

    #[test]
    fn small_failed_distance_is_not_a_guess_count() {
        assert!(compute_special_raw(false, 3.0) > 8.0);
    }

    #[test]
    fn outcome_converts_to_raw_score() {
        assert_eq!(SpecialOutcome::Solved { guesses: 4 }.raw_score(), 4.0);
        assert_eq!(SpecialOutcome::Failed { distance: 12_500.0 }.raw_score(), 16.0);
    }

    #[test]
    fn outcome_validation_bounds() {
        assert!(SpecialOutcome::Solved { guesses: 20 }.validate("NoBordle").is_ok());
        assert!(SpecialOutcome::Solved { guesses: 0 }.validate("NoBordle").is_err());
        assert!(SpecialOutcome::Solved { guesses: 21 }.validate("NoBordle").is_err());
        assert!(SpecialOutcome::Failed { distance: 0.0 }.validate("NoBordle").is_ok());
        assert!(SpecialOutcome::Failed { distance: -1.0 }.validate("NoBordle").is_err());
        assert!(SpecialOutcome::Failed { distance: f64::NAN }.validate("NoBordle").is_err());
    }

    #[test]
    fn raw_special_scores_must_be_reachable() {
        assert!(validate_special_raw("NoBordle", &RawEntry::Value(1.0)).is_ok());
        assert!(validate_special_raw("NoBordle", &RawEntry::Value(16.3)).is_ok());
        assert!(validate_special_raw("NoBordle", &RawEntry::Value(0.5)).is_err());
        assert!(validate_special_raw("NoBordle", &RawEntry::Value(-5.0)).is_err());
        assert!(validate_special_raw("NoBordle", &RawEntry::Value(f64::INFINITY)).is_err());

        let err = validate_special_raw(
            "NoBordle",
            &RawEntry::Malformed(r#"{"guesses":2.5,"result":"solved"}"#.to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOutcome { .. }));
        assert!(err.to_string().starts_with("NoBordle needs a solved/failed outcome"));
    }

    #[test]
    fn outcome_errors_name_the_game() {
        let registry = GameRegistry::new(vec![
            Game::standard("Worldle", 1.2, crate::domain::ScoreRange::new(1.0, 100.0, true)),
            Game::special("ImpossiBordle", 0.9),
        ]);

        let game = special_game(&registry, "ImpossiBordle").unwrap();
        let err = SpecialOutcome::Solved { guesses: 30 }
            .validate(&game.name)
            .unwrap_err();
        assert_eq!(err.to_string(), "ImpossiBordle guesses must be between 1 and 20");

        assert!(matches!(
            special_game(&registry, "Worldle"),
            Err(ValidationError::UnexpectedOutcome { .. })
        ));
        assert_eq!(
            special_game(&registry, "Flagle").unwrap_err().to_string(),
            "unknown game: Flagle"
        );
    }
}
