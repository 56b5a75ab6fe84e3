//! Intersection approaches and the conflict relation between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed approaches to the intersection.
///
/// NORTH and SOUTH conflict with each other, as do EAST and WEST. The
/// relation is symmetric and each direction conflicts with exactly one
/// other.
///
/// # Example
///
/// ```rust
/// use crossroads::core::Direction;
///
/// let north: Direction = "north".parse().unwrap();
/// assert_eq!(north.conflicting(), &[Direction::South]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::West => "WEST",
        }
    }

    /// Directions that may not show GREEN while this one does.
    pub fn conflicting(&self) -> &'static [Direction] {
        match self {
            Self::North => &[Direction::South],
            Self::South => &[Direction::North],
            Self::East => &[Direction::West],
            Self::West => &[Direction::East],
        }
    }

    /// Position in [`Direction::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches no [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}'")]
pub struct UnknownDirectionName(pub String);

impl FromStr for Direction {
    type Err = UnknownDirectionName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|direction| direction.name() == upper)
            .ok_or_else(|| UnknownDirectionName(s.to_string()))
    }
}
