//! Light states.
//!
//! A light shows one of a closed set of states. States are parsed from
//! their names explicitly, so unknown names fail cleanly instead of
//! falling through to a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State shown by a traffic light.
///
/// Only `Green` carries conflict semantics: two conflicting directions may
/// never both show it.
///
/// # Example
///
/// ```rust
/// use crossroads::core::LightState;
///
/// let state: LightState = " green ".parse().unwrap();
/// assert_eq!(state, LightState::Green);
/// assert_eq!(state.name(), "GREEN");
/// assert!("BLUE".parse::<LightState>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LightState {
    Red,
    Green,
    Yellow,
}

impl LightState {
    /// Every state, in declaration order.
    pub const ALL: [LightState; 3] = [LightState::Red, LightState::Green, LightState::Yellow];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
        }
    }

    /// Whether this state lets traffic through and so must not coexist
    /// with the same state on a conflicting direction.
    pub fn is_go(&self) -> bool {
        matches!(self, Self::Green)
    }

    /// Canonical names of every state, for error messages.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(LightState::name).collect()
    }

    /// The order a light cycles through unless told otherwise.
    pub fn default_sequence() -> Vec<LightState> {
        vec![Self::Red, Self::Green, Self::Yellow]
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches no [`LightState`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown light state '{0}'")]
pub struct UnknownLightState(pub String);

impl FromStr for LightState {
    type Err = UnknownLightState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|state| state.name() == upper)
            .ok_or_else(|| UnknownLightState(s.trim().to_string()))
    }
}
