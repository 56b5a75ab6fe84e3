//! The intersection: four lights, a pause flag, and the conflict rule.

use super::snapshot::StatusSnapshot;
use crate::config::LightConfig;
use crate::core::{Clock, Direction, LightState, LightStateRecord, SystemClock};
use crate::error::SignalError;
use crate::light::{LightStatus, LightView, TrafficLight};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Mutable state guarded by the registry lock.
struct Intersection {
    lights: [TrafficLight; 4],
    paused: bool,
}

impl Intersection {
    fn light(&self, direction: Direction) -> &TrafficLight {
        &self.lights[direction.index()]
    }

    fn light_mut(&mut self, direction: Direction) -> &mut TrafficLight {
        &mut self.lights[direction.index()]
    }

    /// First direction conflicting with `direction` that currently shows
    /// GREEN.
    fn green_conflict(&self, direction: Direction) -> Option<Direction> {
        direction
            .conflicting()
            .iter()
            .copied()
            .find(|other| self.light(*other).current_state().is_go())
    }
}

/// Owns the light for every direction and enforces the pause gate and the
/// conflicting-GREEN rule.
///
/// All state sits behind one lock, so each operation, including the
/// check-then-write and advance-then-rollback paths, is a single critical
/// section. The clock is read while the lock is held, so transitions
/// commit in timestamp order. Share the registry between threads with
/// `Arc`.
///
/// # Example
///
/// ```rust
/// use crossroads::core::LightState;
/// use crossroads::{LightRegistry, SignalError};
///
/// let registry = LightRegistry::new();
///
/// assert_eq!(registry.change_state("NORTH"), Ok(LightState::Green));
/// assert!(matches!(
///     registry.change_state("SOUTH"),
///     Err(SignalError::ConflictingGreen { .. })
/// ));
/// ```
pub struct LightRegistry<C: Clock = SystemClock> {
    inner: Mutex<Intersection>,
    clock: C,
}

impl LightRegistry<SystemClock> {
    /// Registry with the standard lights, driven by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for LightRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LightRegistry<C> {
    /// Registry with the standard lights: NORTH and SOUTH red, EAST and
    /// WEST green, each cycling RED → GREEN → YELLOW.
    pub fn with_clock(clock: C) -> Self {
        let now = clock.now();
        let lights = Direction::ALL.map(|direction| {
            let defaults = LightConfig::default_for(direction);
            TrafficLight::new(direction, defaults.initial_state, defaults.cycle_secs(), now)
        });
        Self::from_lights(lights, clock)
    }

    /// `lights` must be ordered as [`Direction::ALL`].
    pub(crate) fn from_lights(lights: [TrafficLight; 4], clock: C) -> Self {
        debug_assert!(lights
            .iter()
            .zip(Direction::ALL)
            .all(|(light, direction)| light.direction() == direction));
        Self {
            inner: Mutex::new(Intersection {
                lights,
                paused: false,
            }),
            clock,
        }
    }

    /// Advance a light to the next state in its sequence.
    ///
    /// Not gated by pause. If the light lands on GREEN while a conflicting
    /// direction is GREEN, the light is restored to exactly what it was
    /// before the call and `ConflictingGreen` is returned.
    pub fn change_state(&self, direction: &str) -> Result<LightState, SignalError> {
        let direction = resolve(direction)?;
        let mut inner = self.inner.lock();
        let now = self.clock.now();

        let before = inner.light(direction).clone();
        inner.light_mut(direction).advance(now);
        let after = inner.light(direction).current_state();

        if after.is_go() {
            if let Some(conflicting) = inner.green_conflict(direction) {
                *inner.light_mut(direction) = before;
                warn!(%direction, %conflicting, "advance rolled back, conflicting green");
                return Err(SignalError::ConflictingGreen {
                    direction,
                    conflicting,
                });
            }
        }

        debug!(%direction, from = %before.current_state(), to = %after, "light advanced");
        Ok(after)
    }

    /// Set a light's state directly.
    ///
    /// Rejected while paused. The conflict check runs before anything is
    /// written, so a rejected call leaves the light untouched.
    pub fn set_light_state(&self, direction: &str, state: LightState) -> Result<(), SignalError> {
        let mut inner = self.inner.lock();
        let now = self.clock.now();

        if inner.paused {
            warn!(direction, %state, "set state rejected, system paused");
            return Err(SignalError::SystemPaused);
        }
        let direction = resolve(direction)?;

        if state.is_go() {
            if let Some(conflicting) = inner.green_conflict(direction) {
                warn!(%direction, %conflicting, "set state rejected, conflicting green");
                return Err(SignalError::ConflictingGreen {
                    direction,
                    conflicting,
                });
            }
        }

        let from = inner.light(direction).current_state();
        inner.light_mut(direction).set_state(state, now)?;
        debug!(%direction, %from, to = %state, "light state set");
        Ok(())
    }

    /// Install a custom sequence on a light. Not gated by pause.
    pub fn set_light_sequence(
        &self,
        direction: &str,
        sequence: Vec<LightState>,
    ) -> Result<(), SignalError> {
        let direction = resolve(direction)?;
        let mut inner = self.inner.lock();

        let light = inner.light_mut(direction);
        light.set_sequence(sequence)?;
        info!(
            %direction,
            sequence = ?light.sequence(),
            state = %light.current_state(),
            "light sequence replaced"
        );
        Ok(())
    }

    pub fn pause(&self) {
        self.inner.lock().paused = true;
        info!("intersection paused");
    }

    pub fn resume(&self) {
        self.inner.lock().paused = false;
        info!("intersection resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.inner.lock().paused
    }

    /// State and time-in-state of every light, plus the pause flag.
    pub fn status_snapshot(&self) -> StatusSnapshot {
        let inner = self.inner.lock();
        let now = self.clock.now();

        StatusSnapshot {
            paused: inner.paused,
            lights: inner
                .lights
                .iter()
                .map(|light| (light.direction(), LightStatus::of(light, now)))
                .collect(),
        }
    }

    /// Full view of one light.
    pub fn light(&self, direction: &str) -> Result<LightView, SignalError> {
        let direction = resolve(direction)?;
        let inner = self.inner.lock();
        let now = self.clock.now();
        Ok(LightView::of(inner.light(direction), now))
    }

    /// The state `change_state` would try to move a light to.
    pub fn next_state(&self, direction: &str) -> Result<LightState, SignalError> {
        let direction = resolve(direction)?;
        Ok(self.inner.lock().light(direction).next_state())
    }

    /// Up to `limit` previous states of one light, newest first.
    pub fn history(
        &self,
        direction: &str,
        limit: usize,
    ) -> Result<Vec<LightStateRecord>, SignalError> {
        let direction = resolve(direction)?;
        Ok(self.inner.lock().light(direction).history(limit))
    }

    /// Up to `limit` previous states of every light.
    pub fn all_histories(&self, limit: usize) -> BTreeMap<Direction, Vec<LightStateRecord>> {
        let inner = self.inner.lock();
        inner
            .lights
            .iter()
            .map(|light| (light.direction(), light.history(limit)))
            .collect()
    }
}

fn resolve(name: &str) -> Result<Direction, SignalError> {
    name.parse()
        .map_err(|_| SignalError::UnknownDirection(name.to_string()))
}
