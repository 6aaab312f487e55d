//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod labels;
pub mod script;

// Re-export common types
pub use config::ConfigStore;
pub use labels::{LabelStore, LabelStoreError};
pub use script::{ScriptConnection, ScriptError};
