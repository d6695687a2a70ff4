use crate::config::cli::Args;
use crate::domain::{Game, GameRegistry, Roster, ScoreRange};
use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

pub mod cli;

/// Read-only installation data: who plays and what they play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub players: Roster,
    pub games: GameRegistry,
}

impl ScoringConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config: ScoringConfig = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        config.validate()?;

        info!(
            "Loaded {} players and {} games from {}",
            config.players.len(),
            config.games.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(ScoreError::Config("roster is empty".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(player) = self.players.names().iter().find(|p| !seen.insert(p.as_str())) {
            return Err(ScoreError::Config(format!("duplicate player {}", player)));
        }

        let mut seen = HashSet::new();
        for game in self.games.iter() {
            if !seen.insert(game.name.as_str()) {
                return Err(ScoreError::Config(format!("duplicate game {}", game.name)));
            }
            if !game.weight.is_finite() || game.weight <= 0.0 {
                return Err(ScoreError::Config(format!(
                    "{} weight must be positive, got {}",
                    game.name, game.weight
                )));
            }
            if !game.divisor().is_finite() || game.divisor() <= 0.0 {
                return Err(ScoreError::Config(format!(
                    "{} divisor must be positive, got {}",
                    game.name,
                    game.divisor()
                )));
            }
            if let Some(range) = game.range() {
                if range.min > range.max {
                    return Err(ScoreError::Config(format!(
                        "{} range is empty ({} > {})",
                        game.name, range.min, range.max
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let guesses = ScoreRange::new(1.0, 100.0, true);

        Self {
            players: Roster::new(["Anthony", "Cole", "Joseph", "Katherine"]),
            games: GameRegistry::new(vec![
                Game::standard("Worldle", 1.2, guesses),
                Game::standard("Globle", 0.8, guesses),
                Game::standard("Countryle", 0.8, guesses),
                Game::standard("Travle", 0.9, ScoreRange::new(-1.0, 100.0, true)),
                Game::rescaled("Geogrid", 0.8, ScoreRange::new(0.0, 900.0, false), 100.0),
                Game::special("NoBordle", 1.1),
                Game::special("ImpossiBordle", 0.9),
            ]),
        }
    }
}

pub struct Config {
    pub args: Args,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let scoring = ScoringConfig::load(&args.config_file)?;
        Ok(Self { args, scoring })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir {} exists", self.args.data_dir.display());
        Ok(())
    }
}
