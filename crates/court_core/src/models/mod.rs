pub mod match_state;
pub mod team;

pub use match_state::{HistoryEntry, MatchState};
pub use team::{TeamSide, TeamState};
