//! Configuration error types.

use crate::core::{Direction, LightState};
use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("{0} has an empty sequence")]
    EmptySequence(Direction),

    #[error("{direction} starts in {state}, which is not in its sequence")]
    InitialStateNotInSequence {
        direction: Direction,
        state: LightState,
    },

    #[error("history capacity must be at least 1")]
    ZeroHistoryCapacity,
}

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but is inconsistent
    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn join(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
