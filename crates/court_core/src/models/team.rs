use serde::{Deserialize, Serialize};

/// Identity of one of the two configured sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "away")]
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Scoreboard counters for one side plus its fixed identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    pub name: String,
    /// Presentation-only; carried through untouched.
    pub color: String,
    /// Point count in the current game, internal units (0,1,2,3,...), not
    /// the displayed 0/15/30/40 labels.
    pub points: u16,
    /// Games won in the current set.
    pub games: u16,
    /// Sets won in the match.
    pub sets: u16,
}

impl TeamState {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into(), points: 0, games: 0, sets: 0 }
    }

    /// Zero the scoring counters, keeping name and color.
    pub fn clear_score(&mut self) {
        self.points = 0;
        self.games = 0;
        self.sets = 0;
    }
}
