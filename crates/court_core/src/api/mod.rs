pub mod json_api;

pub use json_api::{
    apply_command_json, new_match_json, CommandRequest, DisplayScores, NewMatchRequest,
    ScoreCommand, ScoreResponse, TeamConfigData,
};
