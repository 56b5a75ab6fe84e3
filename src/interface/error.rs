//! Response classification for failed commands.

use crate::error::SignalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a reply should be classified by whatever transport carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    BadRequest,
    Forbidden,
    NotFound,
    Internal,
}

impl Status {
    /// Matching HTTP status code.
    pub fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

/// A failed command, already classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InterfaceError {
    pub status: Status,
    pub message: String,
}

impl InterfaceError {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<SignalError> for InterfaceError {
    fn from(err: SignalError) -> Self {
        let status = match &err {
            SignalError::UnknownDirection(_) => Status::NotFound,
            SignalError::InvalidState { .. } | SignalError::InvalidSequence(_) => {
                Status::BadRequest
            }
            SignalError::SystemPaused | SignalError::ConflictingGreen { .. } => Status::Forbidden,
        };
        Self::new(status, err.to_string())
    }
}
