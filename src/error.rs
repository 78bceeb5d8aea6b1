use std::path::PathBuf;

/// Errors raised by board queries and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("cell ({col}, {row}) is out of range")]
    CellOutOfRange { col: usize, row: usize },

    #[error("column {col} is full")]
    ColumnFull { col: usize },
}

impl BoardError {
    /// True for both out-of-range variants.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BoardError::ColumnOutOfRange { .. } | BoardError::CellOutOfRange { .. }
        )
    }
}

/// Errors that can occur when applying a move to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from parsing a typed column number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("input must be an integer, got {0:?}")]
    NotAnInteger(String),

    #[error("column number {0} is out of bounds")]
    OutOfRange(i64),
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
