use std::path::PathBuf;

/// Errors raised while an agent chooses a column.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no playable column")]
    NoMove,

    #[error("input closed before a column was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when saving a move log.
#[derive(Debug, thiserror::Error)]
pub enum MoveLogError {
    #[error("failed to write move log to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that stop a match before it finishes.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{agent} failed to choose a column: {source}")]
    Agent {
        agent: String,
        source: AgentError,
    },

    #[error("{agent} chose rejected column {column}: {source}")]
    RejectedMove {
        agent: String,
        column: usize,
        source: crate::game::TurnError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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
