use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TeamSide, TeamState};

/// Snapshot of the match taken before one point-scoring action was applied.
///
/// `best_of_sets` is fixed for the match and the live history vector is not
/// repeated per entry; undo recombines these fields with the shortened
/// history. Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub home: TeamState,
    pub away: TeamState,
    pub game_winner: Option<TeamSide>,
    pub set_winner: Option<TeamSide>,
    /// Human-readable description, e.g. "Point to Home".
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// Full authoritative state of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub home: TeamState,
    pub away: TeamState,
    /// Odd and positive, fixed at construction.
    pub best_of_sets: u16,
    /// Winner of the most recently completed game. Cleared again as soon as
    /// a point is played that does not end a game.
    pub game_winner: Option<TeamSide>,
    /// Winner of the match. `Some` is terminal.
    pub set_winner: Option<TeamSide>,
    /// Insertion order is chronological order.
    pub history: Vec<HistoryEntry>,
}

impl MatchState {
    pub fn team(&self, side: TeamSide) -> &TeamState {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamState {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// Sets needed to take the match: the majority of `best_of_sets`.
    pub fn sets_to_win(&self) -> u16 {
        self.best_of_sets / 2 + 1
    }

    pub fn is_complete(&self) -> bool {
        self.set_winner.is_some()
    }

    /// Side currently ahead, by sets then games. Presentation aid only; no
    /// scoring rule reads this.
    pub fn leader(&self) -> Option<TeamSide> {
        use std::cmp::Ordering;

        let home = (self.home.sets, self.home.games);
        let away = (self.away.sets, self.away.games);
        match home.cmp(&away) {
            Ordering::Greater => Some(TeamSide::Home),
            Ordering::Less => Some(TeamSide::Away),
            Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> MatchState {
        MatchState {
            home: TeamState::new("Home", "#FF0000"),
            away: TeamState::new("Away", "#0000FF"),
            best_of_sets: 3,
            game_winner: None,
            set_winner: None,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_sets_to_win_majority() {
        let mut state = sample_state();
        for (best_of, needed) in [(1, 1), (3, 2), (5, 3), (7, 4)] {
            state.best_of_sets = best_of;
            assert_eq!(state.sets_to_win(), needed);
        }
    }

    #[test]
    fn test_leader_prefers_sets_over_games() {
        let mut state = sample_state();
        assert_eq!(state.leader(), None);

        state.away.games = 4;
        assert_eq!(state.leader(), Some(TeamSide::Away));

        state.home.sets = 1;
        assert_eq!(state.leader(), Some(TeamSide::Home));
    }

    #[test]
    fn test_state_json_roundtrip() {
        let mut state = sample_state();
        state.home.points = 3;
        state.away.points = 4;
        state.game_winner = Some(TeamSide::Away);
        state.history.push(HistoryEntry {
            home: state.home.clone(),
            away: state.away.clone(),
            game_winner: None,
            set_winner: None,
            action: "Point to Away".to_string(),
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&state).unwrap();
        let restored: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
