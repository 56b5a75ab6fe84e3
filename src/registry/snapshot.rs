//! Read-only status of the whole intersection.

use crate::core::{Direction, LightState};
use crate::light::LightStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every light's state and time-in-state, taken under a single lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub paused: bool,
    pub lights: BTreeMap<Direction, LightStatus>,
}

impl StatusSnapshot {
    pub fn state(&self, direction: Direction) -> Option<LightState> {
        self.lights.get(&direction).map(|status| status.state)
    }

    /// Directions currently showing GREEN.
    pub fn green(&self) -> Vec<Direction> {
        self.lights
            .iter()
            .filter(|(_, status)| status.state.is_go())
            .map(|(direction, _)| *direction)
            .collect()
    }
}
