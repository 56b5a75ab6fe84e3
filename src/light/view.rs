//! Point-in-time views of a light.

use super::machine::TrafficLight;
use crate::core::{Direction, LightState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State and time-in-state of one light.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightStatus {
    pub state: LightState,
    pub duration_secs: u64,
}

impl LightStatus {
    pub fn of(light: &TrafficLight, now: DateTime<Utc>) -> Self {
        Self {
            state: light.current_state(),
            duration_secs: light.current_state_duration(now).as_secs(),
        }
    }
}

/// Full representation of one light.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightView {
    pub direction: Direction,
    pub state: LightState,
    pub next_state: LightState,
    pub sequence: Vec<LightState>,
    pub cycle_secs: u64,
    pub last_change: DateTime<Utc>,
    pub duration_secs: u64,
    pub history_len: usize,
}

impl LightView {
    pub fn of(light: &TrafficLight, now: DateTime<Utc>) -> Self {
        Self {
            direction: light.direction(),
            state: light.current_state(),
            next_state: light.next_state(),
            sequence: light.sequence().to_vec(),
            cycle_secs: light.cycle_secs(),
            last_change: light.last_change(),
            duration_secs: light.current_state_duration(now).as_secs(),
            history_len: light.history_len(),
        }
    }
}
