//! Per-direction traffic light state machine.

use crate::core::{Direction, LightState, LightStateRecord, StateHistory};
use crate::error::SignalError;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// A single light: its current state, the sequence it cycles through,
/// when the current state began, and what it showed before.
///
/// The current state is always a member of the sequence. Every method
/// that needs the time takes it as an argument; the light never reads a
/// clock itself.
///
/// # Example
///
/// ```rust
/// use crossroads::core::{Direction, LightState};
/// use crossroads::light::TrafficLight;
/// use chrono::{Duration, Utc};
///
/// let start = Utc::now();
/// let mut light = TrafficLight::new(Direction::North, LightState::Red, 30, start);
///
/// light.advance(start + Duration::seconds(30));
/// assert_eq!(light.current_state(), LightState::Green);
///
/// let history = light.history(10);
/// assert_eq!(history[0].state, LightState::Red);
/// assert_eq!(history[0].duration_secs, 30);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficLight {
    direction: Direction,
    current: LightState,
    sequence: Vec<LightState>,
    last_change: DateTime<Utc>,
    cycle_secs: u64,
    history: StateHistory,
}

impl TrafficLight {
    /// Create a light cycling RED → GREEN → YELLOW, starting in `initial`.
    pub fn new(
        direction: Direction,
        initial: LightState,
        cycle_secs: u64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            direction,
            current: initial,
            sequence: LightState::default_sequence(),
            last_change: now,
            cycle_secs,
            history: StateHistory::default(),
        }
    }

    /// Create a light with a custom sequence and history capacity.
    ///
    /// Fails if the sequence is empty or does not contain `initial`.
    pub fn with_sequence(
        direction: Direction,
        initial: LightState,
        sequence: Vec<LightState>,
        cycle_secs: u64,
        history_capacity: usize,
        now: DateTime<Utc>,
    ) -> Result<Self, SignalError> {
        if sequence.is_empty() {
            return Err(SignalError::InvalidSequence(
                "sequence must contain at least one state".to_string(),
            ));
        }
        if !sequence.contains(&initial) {
            return Err(SignalError::InvalidState {
                state: initial.name().to_string(),
                expected: sequence,
            });
        }

        Ok(Self {
            direction,
            current: initial,
            sequence,
            last_change: now,
            cycle_secs,
            history: StateHistory::with_capacity(history_capacity),
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_state(&self) -> LightState {
        self.current
    }

    pub fn sequence(&self) -> &[LightState] {
        &self.sequence
    }

    /// When the current state began.
    pub fn last_change(&self) -> DateTime<Utc> {
        self.last_change
    }

    /// Nominal seconds per phase. Informational; nothing advances on it.
    pub fn cycle_secs(&self) -> u64 {
        self.cycle_secs
    }

    /// The state `advance` would move to.
    pub fn next_state(&self) -> LightState {
        // current is always in sequence; position() falls back to 0 only
        // if that invariant were broken
        let index = self
            .sequence
            .iter()
            .position(|s| *s == self.current)
            .unwrap_or(0);
        self.sequence[(index + 1) % self.sequence.len()]
    }

    /// Move to the next state in the sequence.
    ///
    /// Returns whether the state changed. A singleton sequence never
    /// changes.
    pub fn advance(&mut self, now: DateTime<Utc>) -> bool {
        let next = self.next_state();
        self.transition_to(next, now)
    }

    /// Jump straight to `state`, which must be in the sequence.
    ///
    /// Setting the current state again is a no-op and records nothing.
    pub fn set_state(&mut self, state: LightState, now: DateTime<Utc>) -> Result<(), SignalError> {
        if !self.sequence.contains(&state) {
            return Err(SignalError::InvalidState {
                state: state.name().to_string(),
                expected: self.sequence.clone(),
            });
        }
        self.transition_to(state, now);
        Ok(())
    }

    /// Replace the sequence.
    ///
    /// If the current state is not in the new sequence the light moves to
    /// its first state. That move records no history and keeps
    /// `last_change`, so the reported duration still counts from the
    /// previous transition.
    pub fn set_sequence(&mut self, sequence: Vec<LightState>) -> Result<(), SignalError> {
        let Some(&first) = sequence.first() else {
            return Err(SignalError::InvalidSequence(
                "sequence must contain at least one state".to_string(),
            ));
        };
        if !sequence.contains(&self.current) {
            self.current = first;
        }
        self.sequence = sequence;
        Ok(())
    }

    /// Time spent in the current state as of `now`.
    pub fn current_state_duration(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.last_change)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Up to `limit` previous states, newest first.
    pub fn history(&self, limit: usize) -> Vec<LightStateRecord> {
        self.history.recent(limit)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn transition_to(&mut self, next: LightState, now: DateTime<Utc>) -> bool {
        if next == self.current {
            return false;
        }
        self.history.record(LightStateRecord {
            state: self.current,
            started_at: self.last_change,
            duration_secs: self.current_state_duration(now).as_secs(),
        });
        self.current = next;
        self.last_change = now;
        true
    }
}
