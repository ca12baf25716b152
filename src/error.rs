//! Error types for the corral crate

use thiserror::Error;

/// Main error type for the corral crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size} (must be at least {min})")]
    InvalidBoardSize { size: usize, min: usize },

    #[error("invalid move for {player}: {description}")]
    InvalidMove { player: String, description: String },

    #[error("game already over")]
    GameOver,

    #[error("simulated move must not be recorded in history")]
    SimulatedHistoryEntry,

    #[error("row {row} has {got} cells, expected {expected}")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid AI level {level} (must be at most {max})")]
    InvalidAiLevel { level: u8, max: u8 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
