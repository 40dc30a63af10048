//! Error types for the trainer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TrainerError.
pub type Result<T> = std::result::Result<T, TrainerError>;

/// Errors that stop the trainer before a session can start.
///
/// Keystroke processing never produces one of these; overtyping and
/// ambiguous romaji are reported through `KeystrokeOutcome` instead.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("word bank is empty, there is nothing to practise")]
    EmptyWordBank,

    #[error("could not read word bank {}: {source}", .path.display())]
    WordBankUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session length must be at least one word")]
    InvalidSessionLength,

    #[error("could not read config {}: {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
