use crate::domain::{Roster, Standing};
use tracing::debug;

/// Cross-game totals and the ordering derived from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// Aligned to the roster; `None` for players with no score in any game.
    pub totals: Vec<Option<f64>>,
    pub participants: Vec<String>,
    /// Ascending by total, ties kept in roster order.
    pub standings: Vec<Standing>,
    pub winners: Vec<String>,
    pub is_tie: bool,
}

/// Sums each player's weighted scores over the games they played and ranks
/// the players who played anything at all. Lower totals rank higher.
///
/// Ties are exact `f64` equality on the summed totals.
pub fn aggregate(roster: &Roster, weighted: &[Vec<Option<f64>>]) -> Ranking {
    let totals: Vec<Option<f64>> = (0..roster.len())
        .map(|index| {
            weighted
                .iter()
                .filter_map(|column| column.get(index).copied().flatten())
                .fold(None, |total: Option<f64>, score| {
                    Some(total.unwrap_or(0.0) + score)
                })
        })
        .collect();

    let mut ranked: Vec<(&str, f64)> = roster
        .names()
        .iter()
        .zip(&totals)
        .filter_map(|(player, total)| total.map(|total| (player.as_str(), total)))
        .collect();

    let participants = ranked.iter().map(|(player, _)| player.to_string()).collect();

    // Stable, so equal totals keep roster order.
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut standings: Vec<Standing> = Vec::with_capacity(ranked.len());
    for (index, (player, total)) in ranked.iter().enumerate() {
        let placement = match standings.last() {
            Some(previous) if previous.total == *total => previous.placement,
            _ => index + 1,
        };
        standings.push(Standing {
            player: player.to_string(),
            total: *total,
            placement,
        });
    }

    let winners: Vec<String> = match standings.first() {
        Some(best) => standings
            .iter()
            .filter(|standing| standing.total == best.total)
            .map(|standing| standing.player.clone())
            .collect(),
        None => Vec::new(),
    };
    let is_tie = winners.len() > 1;

    debug!(
        "Ranked {} participants, {} winner(s)",
        standings.len(),
        winners.len()
    );

    Ranking {
        totals,
        participants,
        standings,
        winners,
        is_tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["Anthony", "Cole", "Joseph", "Katherine"])
    }

    #[test]
    fn lowest_total_wins() {
        let ranking = aggregate(
            &roster(),
            &[
                vec![Some(1.0), Some(-2.0), Some(0.5), Some(0.0)],
                vec![Some(0.5), Some(0.5), None, Some(-1.0)],
            ],
        );

        assert_eq!(ranking.totals, vec![Some(1.5), Some(-1.5), Some(0.5), Some(-1.0)]);
        let order: Vec<_> = ranking.standings.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(order, vec!["Cole", "Katherine", "Joseph", "Anthony"]);
        assert_eq!(ranking.winners, vec!["Cole".to_string()]);
        assert!(!ranking.is_tie);
    }

    #[test]
    fn tied_minimum_produces_several_winners() {
        let ranking = aggregate(
            &roster(),
            &[vec![Some(3.0), Some(2.4), Some(2.4), None]],
        );

        assert!(ranking.is_tie);
        assert_eq!(ranking.winners, vec!["Cole".to_string(), "Joseph".to_string()]);
        assert!(!ranking.winners.contains(&"Anthony".to_string()));
    }

    #[test]
    fn placements_skip_after_ties() {
        let ranking = aggregate(
            &roster(),
            &[vec![Some(1.0), Some(1.0), Some(2.0), Some(-1.0)]],
        );

        let placements: Vec<_> = ranking
            .standings
            .iter()
            .map(|s| (s.player.as_str(), s.placement))
            .collect();
        assert_eq!(
            placements,
            vec![("Katherine", 1), ("Anthony", 2), ("Cole", 2), ("Joseph", 4)]
        );
    }

    #[test]
    fn players_absent_everywhere_are_excluded() {
        let ranking = aggregate(
            &roster(),
            &[vec![Some(0.0), None, Some(1.0), None], vec![None, None, None, Some(2.0)]],
        );

        assert_eq!(ranking.totals[1], None);
        assert_eq!(
            ranking.participants,
            vec!["Anthony".to_string(), "Joseph".to_string(), "Katherine".to_string()]
        );
        assert!(ranking.standings.iter().all(|s| s.player != "Cole"));
    }

    #[test]
    fn zero_total_is_still_participation() {
        let ranking = aggregate(&roster(), &[vec![Some(0.0), None, None, None]]);

        assert_eq!(ranking.totals[0], Some(0.0));
        assert_eq!(ranking.winners, vec!["Anthony".to_string()]);
    }

    #[test]
    fn empty_day_has_no_winner() {
        let ranking = aggregate(&roster(), &[vec![None, None, None, None]]);

        assert!(ranking.standings.is_empty());
        assert!(ranking.winners.is_empty());
        assert!(!ranking.is_tie);
        assert_eq!(ranking.totals, vec![None; 4]);
    }
}
