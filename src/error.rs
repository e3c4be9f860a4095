use std::path::PathBuf;

use crate::controller::{TransportError, TurnState};

/// Errors raised by board and game-state operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell (column {column}, row {row}) is outside the board")]
    OutOfRange { column: usize, row: usize },

    #[error("cannot place an empty mark")]
    EmptyMark,
}

/// Errors raised by the move search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search invoked on a terminal position with no legal moves")]
    Precondition,

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("game error during search: {0}")]
    Game(#[from] GameError),
}

/// Errors surfaced by the turn controller to its owner.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("moves are not accepted while {state:?}")]
    NotAccepting { state: TurnState },

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("AI search failed: {0}")]
    Search(#[from] SearchError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("failed to spawn search worker: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
