use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("No actions to undo")]
    EmptyHistory,

    #[error("best_of_sets must be a positive odd number, got {given}")]
    InvalidBestOf { given: u16 },

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaMismatch { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ScoreError {
    /// Whether the caller can keep the session going after surfacing the
    /// error as a notice. Configuration and schema failures are not
    /// recoverable at this level.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScoreError::EmptyHistory)
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ScoreError::Deserialization(err.to_string())
        } else {
            ScoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(ScoreError::EmptyHistory.is_recoverable());
        assert!(!ScoreError::InvalidBestOf { given: 4 }.is_recoverable());
        assert!(!ScoreError::SchemaMismatch { found: 2, expected: 1 }.is_recoverable());
    }
}
