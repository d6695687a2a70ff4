use crate::config::ScoringConfig;
use crate::domain::{DailyResult, Game, GameRegistry, GameScores, Roster, Slot};
use crate::services::normalize::normalize;
use crate::services::ranking::aggregate;
use crate::services::weighting::apply_weight;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Stateless engine turning one day's raw columns into a `DailyResult`.
/// Holds only borrowed, read-only configuration, so independent days can be
/// scored concurrently.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    roster: &'a Roster,
    registry: &'a GameRegistry,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self::with_parts(&config.players, &config.games)
    }

    pub fn with_parts(roster: &'a Roster, registry: &'a GameRegistry) -> Self {
        Self { roster, registry }
    }

    /// Scores every known game in `scores_by_game`, whose columns follow
    /// roster order. Unknown games are skipped and reported in
    /// `DailyResult::skipped_games`.
    pub fn compute_daily_result(&self, scores_by_game: &BTreeMap<String, Vec<Slot>>) -> DailyResult {
        let mut known: Vec<(usize, &Game, Vec<Slot>)> = Vec::new();
        let mut skipped_games = Vec::new();

        for (name, column) in scores_by_game {
            match (self.registry.position(name), self.registry.get(name)) {
                (Some(position), Some(game)) => {
                    known.push((position, game, self.align(name, column)));
                }
                _ => {
                    warn!("Skipping unknown game {}", name);
                    skipped_games.push(name.clone());
                }
            }
        }
        known.sort_by_key(|(position, _, _)| *position);

        let games: Vec<GameScores> = known
            .into_iter()
            .map(|(_, game, raw)| self.score_game(game, raw))
            .collect();

        let weighted: Vec<Vec<Option<f64>>> =
            games.iter().map(|scores| scores.weighted.clone()).collect();
        let ranking = aggregate(self.roster, &weighted);

        info!(
            "Scored {} games for {} participants",
            games.len(),
            ranking.participants.len()
        );

        DailyResult {
            players: self.roster.names().to_vec(),
            games,
            totals: ranking.totals,
            participants: ranking.participants,
            rankings: ranking.standings,
            winners: ranking.winners,
            is_tie: ranking.is_tie,
            skipped_games,
        }
    }

    fn score_game(&self, game: &Game, raw: Vec<Slot>) -> GameScores {
        let normalized = normalize(&raw, game);
        let weighted = apply_weight(&normalized, game);

        GameScores {
            game: game.name.clone(),
            raw,
            normalized,
            weighted,
        }
    }

    /// Pads short columns with absences and drops entries past the roster.
    fn align(&self, game: &str, column: &[Slot]) -> Vec<Slot> {
        if column.len() > self.roster.len() {
            warn!(
                "{}: {} entries for {} players, ignoring the extra ones",
                game,
                column.len(),
                self.roster.len()
            );
        }

        let mut aligned: Vec<Slot> = column.iter().take(self.roster.len()).cloned().collect();
        aligned.resize(self.roster.len(), None);
        aligned
    }
}
