//! Core intersection types.
//!
//! This module contains the vocabulary the rest of the crate is built on:
//! - Light states and the directions of the intersection
//! - The conflict relation between directions
//! - Bounded state history
//! - Injectable time sources
//!
//! Nothing in here reads the wall clock except [`SystemClock`].

mod clock;
mod direction;
mod history;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use direction::{Direction, UnknownDirectionName};
pub use history::{LightStateRecord, StateHistory, DEFAULT_HISTORY_CAPACITY};
pub use state::{LightState, UnknownLightState};
