//! Crossroads: a four-way intersection traffic light controller
//!
//! Each of the four approaches (NORTH, SOUTH, EAST, WEST) owns a light
//! that cycles through a sequence of states. A shared registry drives the
//! lights on explicit commands, gates direct state changes on a global
//! pause flag, and refuses any change that would leave two conflicting
//! directions GREEN at once.
//!
//! # Core Concepts
//!
//! - **Light**: a pure per-direction state machine with bounded history
//! - **Registry**: the locked aggregate that owns all four lights
//! - **Conflict pair**: NORTH↔SOUTH and EAST↔WEST may never both be GREEN
//! - **Clock**: injected time source, so durations are testable
//!
//! Nothing advances on a timer. Every transition is a command.
//!
//! # Example
//!
//! ```rust
//! use crossroads::core::LightState;
//! use crossroads::{LightRegistry, SignalError};
//!
//! let registry = LightRegistry::new();
//!
//! // NORTH goes green; SOUTH cannot follow while it is.
//! registry.change_state("NORTH").unwrap();
//! assert!(matches!(
//!     registry.change_state("SOUTH"),
//!     Err(SignalError::ConflictingGreen { .. })
//! ));
//! assert_eq!(registry.light("SOUTH").unwrap().state, LightState::Red);
//!
//! // Direct overrides are refused while paused; cycling is not.
//! registry.pause();
//! assert_eq!(
//!     registry.set_light_state("EAST", LightState::Red),
//!     Err(SignalError::SystemPaused)
//! );
//! assert_eq!(registry.change_state("EAST"), Ok(LightState::Yellow));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod interface;
pub mod light;
pub mod registry;

// Re-export commonly used types
pub use builder::RegistryBuilder;
pub use core::{Clock, Direction, LightState, LightStateRecord};
pub use error::SignalError;
pub use light::TrafficLight;
pub use registry::{LightRegistry, StatusSnapshot};
