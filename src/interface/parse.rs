//! Parsing of caller-supplied state names and sequences.

use crate::core::{LightState, UnknownLightState};
use crate::error::SignalError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Parse one state name, case-insensitively.
///
/// An unknown name is reported together with every valid name.
pub fn parse_state_name(name: &str) -> Result<LightState, SignalError> {
    name.parse::<LightState>()
        .map_err(|UnknownLightState(state)| SignalError::InvalidState {
            state,
            expected: LightState::ALL.to_vec(),
        })
}

/// Parse a comma-separated list of state names into a sequence.
///
/// Every unknown name is reported, not just the first. Blank input is an
/// empty sequence and is rejected.
///
/// # Example
///
/// ```rust
/// use crossroads::core::LightState;
/// use crossroads::interface::parse_sequence;
///
/// assert_eq!(
///     parse_sequence("red, Yellow").unwrap(),
///     vec![LightState::Red, LightState::Yellow]
/// );
///
/// let err = parse_sequence("red,blue,amber").unwrap_err();
/// assert!(err.to_string().contains("BLUE"));
/// assert!(err.to_string().contains("AMBER"));
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<LightState>, SignalError> {
    if input.trim().is_empty() {
        return Err(SignalError::InvalidSequence(
            "sequence must contain at least one state".to_string(),
        ));
    }

    let states: Vec<Validation<LightState, NonEmptyVec<String>>> = input
        .split(',')
        .map(|name| match name.parse::<LightState>() {
            Ok(state) => Validation::success(state),
            Err(UnknownLightState(name)) => Validation::fail(name.to_ascii_uppercase()),
        })
        .collect();

    match Validation::all_vec(states) {
        Validation::Success(sequence) => Ok(sequence),
        Validation::Failure(unknown) => Err(SignalError::InvalidSequence(format!(
            "unknown states {:?}, use comma-separated values of [{}]",
            unknown.iter().collect::<Vec<_>>(),
            LightState::names().join(", ")
        ))),
    }
}
