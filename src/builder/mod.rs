//! Builder API for constructing a registry.
//!
//! [`RegistryBuilder`] starts from the standard intersection and lets
//! callers override individual lights, load a [`RegistryConfig`], or
//! inject a clock before building.
//!
//! [`RegistryConfig`]: crate::config::RegistryConfig

pub mod error;
pub mod registry;

pub use error::BuildError;
pub use registry::RegistryBuilder;
