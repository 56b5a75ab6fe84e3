//! Build errors for the registry builder.

use crate::config::ConfigError;
use crate::error::SignalError;
use thiserror::Error;

/// Errors that can occur when building a registry.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("Light could not be built: {0}")]
    Light(#[from] SignalError),
}
