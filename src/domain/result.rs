use super::score::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every column computed for one game, aligned to roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameScores {
    pub game: String,
    pub raw: Vec<Slot>,
    pub normalized: Vec<Option<f64>>,
    pub weighted: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player: String,
    pub total: f64,
    /// Competition placement: equal totals share a placement (1, 1, 3).
    pub placement: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    pub players: Vec<String>,
    pub games: Vec<GameScores>,
    /// Per-player total, `None` for players who did not play at all.
    pub totals: Vec<Option<f64>>,
    pub participants: Vec<String>,
    pub rankings: Vec<Standing>,
    pub winners: Vec<String>,
    pub is_tie: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_games: Vec<String>,
}

impl DailyResult {
    pub fn has_result(&self) -> bool {
        !self.rankings.is_empty()
    }

    pub fn total_for(&self, player: &str) -> Option<f64> {
        let index = self.players.iter().position(|name| name == player)?;
        self.totals.get(index).copied().flatten()
    }

    pub fn game(&self, name: &str) -> Option<&GameScores> {
        self.games.iter().find(|scores| scores.game == name)
    }

    /// Human readable headline, e.g. "Cole wins" or "Anthony & Cole tie".
    pub fn headline(&self) -> String {
        match self.winners.as_slice() {
            [] => "No result".to_string(),
            [winner] => format!("{} wins", winner),
            winners if winners.len() == self.players.len() => "Everyone ties".to_string(),
            [rest @ .., last] => format!("{} & {} tie", rest.join(", "), last),
        }
    }
}

impl fmt::Display for DailyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scores in &self.games {
            writeln!(f, "{}", scores.game)?;
            for (index, player) in self.players.iter().enumerate() {
                let raw = scores.raw.get(index).cloned().flatten();
                let normalized = scores.normalized.get(index).copied().flatten();
                let weighted = scores.weighted.get(index).copied().flatten();

                match (raw, normalized, weighted) {
                    (Some(raw), Some(normalized), Some(weighted)) => writeln!(
                        f,
                        "  {}: {} (normalized: {:.3}, weighted: {:.3})",
                        player, raw, normalized, weighted
                    )?,
                    _ => writeln!(f, "  {}: N/A", player)?,
                }
            }
        }

        writeln!(f, "Final rankings")?;
        for standing in &self.rankings {
            writeln!(
                f,
                "  {}. {}: {:.3}",
                standing.placement, standing.player, standing.total
            )?;
        }
        write!(f, "{}", self.headline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_winners(winners: &[&str]) -> DailyResult {
        DailyResult {
            players: ["Anthony", "Cole", "Joseph"].map(String::from).to_vec(),
            winners: winners.iter().map(|w| w.to_string()).collect(),
            is_tie: winners.len() > 1,
            ..Default::default()
        }
    }

    #[test]
    fn headline_names_single_winner() {
        assert_eq!(result_with_winners(&["Cole"]).headline(), "Cole wins");
    }

    #[test]
    fn headline_joins_tied_winners() {
        assert_eq!(
            result_with_winners(&["Anthony", "Cole"]).headline(),
            "Anthony & Cole tie"
        );
        assert_eq!(
            result_with_winners(&["Anthony", "Cole", "Joseph"]).headline(),
            "Everyone ties"
        );
    }

    #[test]
    fn headline_without_participants() {
        assert_eq!(result_with_winners(&[]).headline(), "No result");
    }
}
