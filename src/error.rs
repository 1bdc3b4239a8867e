//! Error types

use thiserror::Error;

/// Failures surfaced to the host.
///
/// Once a round is running nothing can fail; the only terminal outcome is the
/// `over` phase.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word source has no words of {min}..={max} characters")]
    EmptyWordSource { min: usize, max: usize },

    #[error("invalid tuning: {0}")]
    Tuning(#[from] serde_json::Error),
}
