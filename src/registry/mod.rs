//! Shared registry of the intersection's lights.
//!
//! The registry is the only place lights are mutated once built. It looks
//! up directions by name, gates direct state changes on the pause flag,
//! and refuses any change that would leave two conflicting directions
//! GREEN.

mod lights;
mod snapshot;

pub use lights::LightRegistry;
pub use snapshot::StatusSnapshot;
