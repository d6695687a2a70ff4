use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive bounds a standard game's raw score must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub integer: bool,
}

impl ScoreRange {
    pub fn new(min: f64, max: f64, integer: bool) -> Self {
        Self { min, max, integer }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameKind {
    /// Raw score is entered directly, lower is better.
    Standard { range: ScoreRange },
    /// Like `Standard`, but raw values are divided by `divisor` before
    /// normalization to land on the same scale as the other games.
    Rescaled { range: ScoreRange, divisor: f64 },
    /// Raw score is derived from a solved/failed outcome.
    Special,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    pub weight: f64,
    #[serde(flatten)]
    pub kind: GameKind,
}

impl Game {
    pub fn standard(name: &str, weight: f64, range: ScoreRange) -> Self {
        Self {
            name: name.to_string(),
            weight,
            kind: GameKind::Standard { range },
        }
    }

    pub fn rescaled(name: &str, weight: f64, range: ScoreRange, divisor: f64) -> Self {
        Self {
            name: name.to_string(),
            weight,
            kind: GameKind::Rescaled { range, divisor },
        }
    }

    pub fn special(name: &str, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            weight,
            kind: GameKind::Special,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self.kind, GameKind::Special)
    }

    /// Validation range, `None` for special games.
    pub fn range(&self) -> Option<&ScoreRange> {
        match &self.kind {
            GameKind::Standard { range } | GameKind::Rescaled { range, .. } => Some(range),
            GameKind::Special => None,
        }
    }

    /// Factor raw values are divided by before the median is taken.
    pub fn divisor(&self) -> f64 {
        match self.kind {
            GameKind::Rescaled { divisor, .. } => divisor,
            _ => 1.0,
        }
    }
}

/// Ordered, read-only table of the games an installation knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameRegistry {
    games: Vec<Game>,
}

impl GameRegistry {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn get(&self, name: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.name == name)
    }

    /// Position of a game in registry order, used to order per-game output.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.games.iter().position(|game| game.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
