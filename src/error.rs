//! Errors raised by lights and the registry.

use crate::core::{Direction, LightState};
use thiserror::Error;

/// Validation failures for intersection operations.
///
/// Every variant is local and synchronous, and none is worth retrying.
/// An operation that fails leaves the registry exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    #[error("Unknown direction '{0}'")]
    UnknownDirection(String),

    #[error("Invalid state '{state}', expected one of [{}]", names(.expected))]
    InvalidState {
        state: String,
        expected: Vec<LightState>,
    },

    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Cannot change state while system is paused")]
    SystemPaused,

    #[error("Cannot set {direction} to GREEN while {conflicting} is GREEN")]
    ConflictingGreen {
        direction: Direction,
        conflicting: Direction,
    },
}

fn names(states: &[LightState]) -> String {
    states
        .iter()
        .map(LightState::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_names_both_directions() {
        let err = SignalError::ConflictingGreen {
            direction: Direction::South,
            conflicting: Direction::North,
        };
        assert_eq!(
            err.to_string(),
            "Cannot set SOUTH to GREEN while NORTH is GREEN"
        );
    }

    #[test]
    fn invalid_state_lists_expected_states() {
        let err = SignalError::InvalidState {
            state: "GREEN".to_string(),
            expected: vec![LightState::Red, LightState::Yellow],
        };
        assert_eq!(
            err.to_string(),
            "Invalid state 'GREEN', expected one of [RED, YELLOW]"
        );
    }
}
