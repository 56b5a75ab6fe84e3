//! Request/response surface over the registry.
//!
//! This is the contract a transport (HTTP, a CLI, a message bus) would sit
//! on: typed [`Command`]s in, serializable [`Reply`]s out, and every
//! failure classified with a [`Status`]. No transport is provided here.

mod command;
mod error;
mod parse;

pub use command::{dispatch, dispatch_json, Command, Reply, DEFAULT_HISTORY_LIMIT};
pub use error::{InterfaceError, Status};
pub use parse::{parse_sequence, parse_state_name};
