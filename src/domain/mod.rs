//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod scripting;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use scripting::{Command, Response, SilenceParams};
