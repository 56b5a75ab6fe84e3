//! Bounded history of the states a light has left.

use super::state::LightState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of records a light keeps unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// A state the light has left, when it began, and how long it lasted.
///
/// # Example
///
/// ```rust
/// use crossroads::core::{LightState, LightStateRecord};
/// use chrono::Utc;
///
/// let record = LightStateRecord {
///     state: LightState::Red,
///     started_at: Utc::now(),
///     duration_secs: 30,
/// };
/// assert_eq!(record.state, LightState::Red);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightStateRecord {
    /// The state that was left
    pub state: LightState,
    /// When that state began
    pub started_at: DateTime<Utc>,
    /// Whole seconds spent in it
    pub duration_secs: u64,
}

/// Newest-first log of [`LightStateRecord`]s with a fixed capacity.
///
/// Once the log holds `capacity` records, recording another evicts the
/// oldest.
///
/// # Example
///
/// ```rust
/// use crossroads::core::{LightState, LightStateRecord, StateHistory};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(2);
/// for (state, secs) in [(LightState::Red, 30), (LightState::Green, 25), (LightState::Yellow, 5)] {
///     history.record(LightStateRecord { state, started_at: Utc::now(), duration_secs: secs });
/// }
///
/// let recent = history.recent(10);
/// assert_eq!(recent.len(), 2);
/// assert_eq!(recent[0].state, LightState::Yellow);
/// assert_eq!(recent[1].state, LightState::Green);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct StateHistory {
    records: VecDeque<LightStateRecord>,
    capacity: usize,
}

/// Wire form of [`StateHistory`], loaded through the same capacity rules
/// as [`StateHistory::with_capacity`].
#[derive(Deserialize)]
struct StoredHistory {
    records: VecDeque<LightStateRecord>,
    capacity: usize,
}

impl From<StoredHistory> for StateHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self::with_capacity(stored.capacity);
        history.records = stored.records;
        history.records.truncate(history.capacity);
        history
    }
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl StateHistory {
    /// Create an empty history holding at most `capacity` records.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a state the light just left, evicting the oldest record if
    /// the log is full.
    pub fn record(&mut self, record: LightStateRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    /// Up to `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<LightStateRecord> {
        self.records.iter().take(limit).cloned().collect()
    }

    /// Iterate over all records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LightStateRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
