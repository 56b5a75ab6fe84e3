//! Commands accepted by the intersection and the replies they produce.

use super::error::{InterfaceError, Status};
use super::parse::{parse_sequence, parse_state_name};
use crate::core::{Clock, Direction, LightStateRecord};
use crate::light::LightView;
use crate::registry::{LightRegistry, StatusSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// History entries returned when a command does not give a limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// A request against the intersection.
///
/// Directions and state names arrive as caller-supplied strings and are
/// parsed case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Every light's status and the pause flag
    Status,
    /// Full view of one light
    Light { direction: String },
    /// Advance one light through its sequence
    Change { direction: String },
    Pause,
    Resume,
    /// Set one light's state by name
    SetState { direction: String, state: String },
    /// Install a comma-separated sequence on one light
    SetSequence { direction: String, sequence: String },
    History {
        direction: String,
        #[serde(default = "default_limit")]
        limit: usize,
    },
    AllHistories {
        #[serde(default = "default_limit")]
        limit: usize,
    },
    /// Accepted but not acted on
    EmergencyStop,
}

/// Successful result of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply {
    Status(StatusSnapshot),
    Light(LightView),
    Message(String),
    History(Vec<LightStateRecord>),
    AllHistories(BTreeMap<Direction, Vec<LightStateRecord>>),
}

/// Run a command against the registry.
///
/// # Example
///
/// ```rust
/// use crossroads::interface::{dispatch, Command, Reply, Status};
/// use crossroads::LightRegistry;
///
/// let registry = LightRegistry::new();
///
/// let reply = dispatch(&registry, Command::Change { direction: "north".into() }).unwrap();
/// assert_eq!(reply, Reply::Message("Light at NORTH is now GREEN".into()));
///
/// let err = dispatch(&registry, Command::Change { direction: "south".into() }).unwrap_err();
/// assert_eq!(err.status, Status::Forbidden);
/// ```
pub fn dispatch<C: Clock>(
    registry: &LightRegistry<C>,
    command: Command,
) -> Result<Reply, InterfaceError> {
    let reply = match command {
        Command::Status => Reply::Status(registry.status_snapshot()),
        Command::Light { direction } => Reply::Light(registry.light(&direction)?),
        Command::Change { direction } => {
            let state = registry.change_state(&direction)?;
            Reply::Message(format!(
                "Light at {} is now {}",
                direction.trim().to_ascii_uppercase(),
                state
            ))
        }
        Command::Pause => {
            registry.pause();
            Reply::Message("Traffic light operation paused".to_string())
        }
        Command::Resume => {
            registry.resume();
            Reply::Message("Traffic light operation resumed".to_string())
        }
        Command::SetState { direction, state } => {
            let state = parse_state_name(&state)?;
            registry.set_light_state(&direction, state)?;
            Reply::Message(format!(
                "Light at {} set to {}",
                direction.trim().to_ascii_uppercase(),
                state
            ))
        }
        Command::SetSequence {
            direction,
            sequence,
        } => {
            let sequence = parse_sequence(&sequence)?;
            let names: Vec<_> = sequence.iter().map(|s| s.name()).collect();
            registry.set_light_sequence(&direction, sequence)?;
            Reply::Message(format!(
                "Custom sequence set for {}: [{}]",
                direction.trim().to_ascii_uppercase(),
                names.join(", ")
            ))
        }
        Command::History { direction, limit } => {
            Reply::History(registry.history(&direction, limit)?)
        }
        Command::AllHistories { limit } => Reply::AllHistories(registry.all_histories(limit)),
        Command::EmergencyStop => {
            warn!("emergency stop requested, no handler installed");
            Reply::Message("Emergency stop acknowledged; no lights were changed".to_string())
        }
    };
    Ok(reply)
}

/// Run a JSON-encoded command and produce a JSON body with its status.
///
/// Failures are encoded as `{"error": "..."}`.
pub fn dispatch_json<C: Clock>(registry: &LightRegistry<C>, input: &str) -> (Status, String) {
    let result = serde_json::from_str::<Command>(input)
        .map_err(|err| InterfaceError::new(Status::BadRequest, format!("Malformed command: {err}")))
        .and_then(|command| dispatch(registry, command));

    match result {
        Ok(reply) => match serde_json::to_string(&reply) {
            Ok(body) => (Status::Ok, body),
            Err(err) => error_body(InterfaceError::new(Status::Internal, err.to_string())),
        },
        Err(err) => error_body(err),
    }
}

fn error_body(err: InterfaceError) -> (Status, String) {
    (
        err.status,
        serde_json::json!({ "error": err.message }).to_string(),
    )
}
