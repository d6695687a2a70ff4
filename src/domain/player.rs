use serde::{Deserialize, Serialize};

/// Fixed, ordered list of the players of an installation. Order only
/// matters for stable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.players.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.players
    }
}
