//! Error types for the engine and its configuration.

use thiserror::Error;

use super::action::Action;
use crate::engine::Phase;

/// Errors returned by `DurakEngine` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The action is not in the legal set for the current phase.
    #[error("illegal action {action} during {phase:?}")]
    IllegalAction { action: Action, phase: Phase },

    /// Seat count outside the supported range.
    #[error("invalid player count {count}: expected {min}..={max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    /// No legal deal was found within the retry budget.
    #[error("could not deal legal starting hands after {attempts} attempts")]
    DeckExhausted { attempts: u32 },

    /// `step` was called before `reset`.
    #[error("engine has not been reset")]
    NotStarted,

    /// `step` was called after the game ended.
    #[error("game is already over")]
    GameOver,
}

/// Invalid configuration values or unreadable configuration input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Engine result alias.
pub type EngineResult<T> = Result<T, EngineError>;
