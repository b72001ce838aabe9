//! JSON command API for external UIs.
//!
//! Stateless string-in/string-out surface: the caller holds the state blob
//! between calls and sends it back with each command, so the engine itself
//! keeps nothing alive across requests. Soft conditions (undo with nothing
//! to undo, a point after the match is decided) come back as a `notice` on
//! an otherwise unchanged state rather than an error, matching the
//! disable-controls-and-toast convention of scoreboard UIs.

use serde::{Deserialize, Serialize};

use crate::engine::display::display_score;
use crate::engine::{MatchConfig, MatchEngine};
use crate::error::{Result, ScoreError};
use crate::models::{MatchState, TeamSide};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct NewMatchRequest {
    pub schema_version: u8,
    pub home_team: TeamConfigData,
    pub away_team: TeamConfigData,
    #[serde(default = "default_best_of")]
    pub best_of_sets: u16,
}

fn default_best_of() -> u16 {
    MatchConfig::default().best_of_sets
}

#[derive(Debug, Deserialize)]
pub struct TeamConfigData {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub schema_version: u8,
    pub state: MatchState,
    pub command: ScoreCommand,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum ScoreCommand {
    #[serde(rename = "point_home")]
    PointHome,
    #[serde(rename = "point_away")]
    PointAway,
    #[serde(rename = "undo")]
    Undo,
    #[serde(rename = "reset")]
    Reset,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub schema_version: u8,
    pub state: MatchState,
    pub display: DisplayScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Derived point labels, so dumb renderers need no scoring knowledge.
#[derive(Debug, Serialize)]
pub struct DisplayScores {
    pub home_points: String,
    pub away_points: String,
}

/// Create a fresh match from team configuration. Colors and `best_of_sets`
/// fall back to the stock defaults when omitted.
pub fn new_match_json(request: &str) -> Result<String> {
    let request: NewMatchRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;

    let defaults = MatchConfig::default();
    let engine = MatchEngine::new(MatchConfig {
        home_name: request.home_team.name,
        home_color: request.home_team.color.unwrap_or(defaults.home_color),
        away_name: request.away_team.name,
        away_color: request.away_team.color.unwrap_or(defaults.away_color),
        best_of_sets: request.best_of_sets,
    })?;

    respond(engine.into_state(), None)
}

/// Apply one scoreboard command to a caller-held state blob.
pub fn apply_command_json(request: &str) -> Result<String> {
    let request: CommandRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;
    let mut engine = MatchEngine::from_state(request.state)?;

    let notice = match request.command {
        ScoreCommand::PointHome => award(&mut engine, TeamSide::Home),
        ScoreCommand::PointAway => award(&mut engine, TeamSide::Away),
        ScoreCommand::Undo => match engine.undo() {
            Ok(_) => Some("Action undone!".to_string()),
            Err(ScoreError::EmptyHistory) => Some("No actions to undo!".to_string()),
            Err(err) => return Err(err),
        },
        ScoreCommand::Reset => {
            engine.reset();
            Some("Match has been reset!".to_string())
        }
    };

    respond(engine.into_state(), notice)
}

fn award(engine: &mut MatchEngine, side: TeamSide) -> Option<String> {
    if engine.state().is_complete() {
        return Some("Match is already complete".to_string());
    }
    engine.award_point(side);
    None
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(ScoreError::SchemaMismatch { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

fn respond(state: MatchState, notice: Option<String>) -> Result<String> {
    let display = DisplayScores {
        home_points: display_score(state.home.points, state.away.points).to_string(),
        away_points: display_score(state.away.points, state.home.points).to_string(),
    };
    let response = ScoreResponse { schema_version: SCHEMA_VERSION, state, display, notice };
    Ok(serde_json::to_string(&response)?)
}
