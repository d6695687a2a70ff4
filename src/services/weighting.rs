use crate::domain::Game;

/// Scales each present normalized score by the game's weight; absences stay absent.
pub fn apply_weight(normalized: &[Option<f64>], game: &Game) -> Vec<Option<f64>> {
    normalized
        .iter()
        .map(|score| score.map(|score| score * game.weight))
        .collect()
}
