use thiserror::Error;

use crate::models::{Category, PlayerId};

#[derive(Error, Debug)]
pub enum LineError {
    #[error("No history to undo")]
    NoHistory,

    #[error("Invalid reorder for {category}: {reason}")]
    InvalidReorder { category: Category, reason: String },

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LineError {
    /// Rejections that leave the game untouched and can simply be retried
    /// with different input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LineError::NoHistory => true,
            LineError::InvalidReorder { .. } => true,
            LineError::PlayerNotFound(_) => true,
            LineError::EmptyName => true,
            LineError::InvalidConfig(_) => false,
            LineError::Json(_) | LineError::Yaml(_) => false,
        }
    }

    /// Stable error code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            LineError::NoHistory => "NO_HISTORY",
            LineError::InvalidReorder { .. } => "INVALID_REORDER",
            LineError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            LineError::EmptyName => "EMPTY_NAME",
            LineError::InvalidConfig(_) => "INVALID_CONFIG",
            LineError::Json(_) | LineError::Yaml(_) => "PARSE_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, LineError>;
