//! Intersection configuration.
//!
//! A [`RegistryConfig`] describes how each light starts: its initial
//! state, its sequence, and its nominal phase length. Every field has a
//! default, so an empty JSON object yields the standard intersection.
//!
//! Validation uses Stillwater's `Validation` to report every problem in
//! one pass rather than stopping at the first.

use crate::core::{Direction, LightState, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigIssue};

/// Nominal seconds spent in `state` per cycle.
pub fn default_cycle_secs(state: LightState) -> u64 {
    match state {
        LightState::Red => 30,
        LightState::Green => 25,
        LightState::Yellow => 5,
    }
}

/// NORTH and SOUTH start red, EAST and WEST start green.
pub fn default_initial_state(direction: Direction) -> LightState {
    match direction {
        Direction::North | Direction::South => LightState::Red,
        Direction::East | Direction::West => LightState::Green,
    }
}

/// How one light starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    pub initial_state: LightState,

    #[serde(default = "LightState::default_sequence")]
    pub sequence: Vec<LightState>,

    /// Defaults to the nominal length of `initial_state`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_secs: Option<u64>,
}

impl LightConfig {
    pub fn default_for(direction: Direction) -> Self {
        Self {
            initial_state: default_initial_state(direction),
            sequence: LightState::default_sequence(),
            cycle_secs: None,
        }
    }

    pub fn cycle_secs(&self) -> u64 {
        self.cycle_secs
            .unwrap_or_else(|| default_cycle_secs(self.initial_state))
    }
}

/// Configuration for a whole intersection.
///
/// # Example
///
/// ```rust
/// use crossroads::config::RegistryConfig;
/// use crossroads::core::{Direction, LightState};
///
/// let config = RegistryConfig::from_json_str(
///     r#"{ "history_capacity": 20, "lights": { "EAST": { "initial_state": "RED" } } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.history_capacity, 20);
/// assert_eq!(config.light(Direction::East).initial_state, LightState::Red);
/// assert_eq!(config.light(Direction::West).initial_state, LightState::Green);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub history_capacity: usize,
    pub lights: BTreeMap<Direction, LightConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            lights: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration for `direction`, falling back to the standard light.
    pub fn light(&self, direction: Direction) -> LightConfig {
        self.lights
            .get(&direction)
            .cloned()
            .unwrap_or_else(|| LightConfig::default_for(direction))
    }

    /// Check every light and the history capacity, collecting all issues.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        checks.push(if self.history_capacity == 0 {
            Validation::fail(ConfigIssue::ZeroHistoryCapacity)
        } else {
            Validation::success(())
        });

        for direction in Direction::ALL {
            checks.push(check_light(direction, &self.light(direction)));
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(issues) => Err(ConfigError::Invalid(
                issues.iter().cloned().collect(),
            )),
        }
    }
}

fn check_light(direction: Direction, light: &LightConfig) -> Validation<(), NonEmptyVec<ConfigIssue>> {
    if light.sequence.is_empty() {
        Validation::fail(ConfigIssue::EmptySequence(direction))
    } else if !light.sequence.contains(&light.initial_state) {
        Validation::fail(ConfigIssue::InitialStateNotInSequence {
            direction,
            state: light.initial_state,
        })
    } else {
        Validation::success(())
    }
}
