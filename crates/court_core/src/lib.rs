//! # court_core - Tennis Match Scoring Engine
//!
//! Authoritative scoring state machine for a two-team tennis scoreboard.
//!
//! ## Features
//! - Point/game/set/match progression with deuce and advantage handling
//! - Exact single-step undo via full-state snapshots
//! - Pure display-score derivation (0/15/30/40/Deuce/Advantage)
//! - JSON command API for easy integration with UI layers

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the main API functions
pub use api::{apply_command_json, new_match_json};

// Re-export the engine and display derivation
pub use engine::display::{display_score, score_summary, TENNIS_POINTS};
pub use engine::{MatchConfig, MatchEngine};

// Re-export core types
pub use error::{Result, ScoreError};
pub use models::{HistoryEntry, MatchState, TeamSide, TeamState};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
