//! Builder for constructing light registries.

use crate::builder::error::BuildError;
use crate::config::{LightConfig, RegistryConfig};
use crate::core::{Clock, Direction, LightState, SystemClock};
use crate::light::TrafficLight;
use crate::registry::LightRegistry;

/// Builder for constructing registries with a fluent API.
///
/// # Example
///
/// ```rust
/// use crossroads::builder::RegistryBuilder;
/// use crossroads::core::{Direction, LightState};
///
/// let registry = RegistryBuilder::new()
///     .initial(Direction::East, LightState::Red)
///     .sequence(Direction::West, vec![LightState::Green, LightState::Red])
///     .history_capacity(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.light("EAST").unwrap().state, LightState::Red);
/// assert_eq!(registry.next_state("WEST").unwrap(), LightState::Red);
/// ```
pub struct RegistryBuilder<C: Clock = SystemClock> {
    config: RegistryConfig,
    clock: C,
}

impl RegistryBuilder<SystemClock> {
    /// Create a builder for the standard intersection on the wall clock.
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for RegistryBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RegistryBuilder<C> {
    /// Replace the whole configuration. Later overrides apply on top.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different time source.
    pub fn clock<C2: Clock>(self, clock: C2) -> RegistryBuilder<C2> {
        RegistryBuilder {
            config: self.config,
            clock,
        }
    }

    /// Set the state a light starts in.
    pub fn initial(mut self, direction: Direction, state: LightState) -> Self {
        self.light_mut(direction).initial_state = state;
        self
    }

    /// Set the sequence a light cycles through.
    pub fn sequence(mut self, direction: Direction, sequence: Vec<LightState>) -> Self {
        self.light_mut(direction).sequence = sequence;
        self
    }

    /// Set a light's nominal phase length.
    pub fn cycle_secs(mut self, direction: Direction, secs: u64) -> Self {
        self.light_mut(direction).cycle_secs = Some(secs);
        self
    }

    /// Set how many history records each light keeps.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Build the registry.
    /// Returns an error if the configuration is inconsistent.
    pub fn build(self) -> Result<LightRegistry<C>, BuildError> {
        self.config.validate()?;

        let now = self.clock.now();
        let capacity = self.config.history_capacity;
        let [north, south, east, west] = Direction::ALL.map(|direction| {
            let light = self.config.light(direction);
            let cycle_secs = light.cycle_secs();
            TrafficLight::with_sequence(
                direction,
                light.initial_state,
                light.sequence,
                cycle_secs,
                capacity,
                now,
            )
        });

        Ok(LightRegistry::from_lights(
            [north?, south?, east?, west?],
            self.clock,
        ))
    }

    fn light_mut(&mut self, direction: Direction) -> &mut LightConfig {
        self.config
            .lights
            .entry(direction)
            .or_insert_with(|| LightConfig::default_for(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ConfigIssue};
    use crate::core::ManualClock;
    use chrono::Duration;
    use std::sync::Arc;

    #[test]
    fn default_builder_matches_standard_registry() {
        let built = RegistryBuilder::new().build().unwrap().status_snapshot();
        let standard = LightRegistry::new().status_snapshot();

        assert_eq!(built.paused, standard.paused);
        for direction in Direction::ALL {
            assert_eq!(built.state(direction), standard.state(direction));
        }
    }

    #[test]
    fn builder_validates_overrides() {
        let result = RegistryBuilder::new()
            .sequence(Direction::North, vec![LightState::Green])
            .build();

        match result {
            Err(BuildError::Config(ConfigError::Invalid(issues))) => {
                assert_eq!(
                    issues,
                    vec![ConfigIssue::InitialStateNotInSequence {
                        direction: Direction::North,
                        state: LightState::Red,
                    }]
                );
            }
            other => panic!("expected config error, got {:?}", other.err()),
        }
    }

    #[test]
    fn builder_applies_config_and_capacity() {
        let config = RegistryConfig::from_json_str(
            r#"{ "lights": { "SOUTH": { "initial_state": "YELLOW", "cycle_secs": 4 } } }"#,
        )
        .unwrap();

        let registry = RegistryBuilder::new()
            .config(config)
            .history_capacity(2)
            .build()
            .unwrap();

        let south = registry.light("SOUTH").unwrap();
        assert_eq!(south.state, LightState::Yellow);
        assert_eq!(south.cycle_secs, 4);

        for _ in 0..5 {
            registry.change_state("SOUTH").unwrap();
        }
        assert_eq!(registry.history("SOUTH", 10).unwrap().len(), 2);
    }

    #[test]
    fn builder_uses_injected_clock() {
        let clock = Arc::new(ManualClock::default());
        let registry = RegistryBuilder::new()
            .clock(Arc::clone(&clock))
            .cycle_secs(Direction::West, 40)
            .build()
            .unwrap();

        clock.advance(Duration::seconds(9));
        let west = registry.light("WEST").unwrap();
        assert_eq!(west.duration_secs, 9);
        assert_eq!(west.cycle_secs, 40);
    }
}
