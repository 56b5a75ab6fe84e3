//! Traffic light state machine and its read-only views.
//!
//! [`TrafficLight`] is pure: every operation that depends on time takes
//! `now` explicitly, and nothing in this module logs or locks. The
//! registry supplies both.

mod machine;
mod view;

pub use machine::TrafficLight;
pub use view::{LightStatus, LightView};
