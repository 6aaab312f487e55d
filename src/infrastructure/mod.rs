//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the named pipes, the filesystem, and config storage.

pub mod config;
pub mod labels;
#[cfg(unix)]
pub mod pipe;

// Re-export adapters
pub use config::XdgConfigStore;
pub use labels::FsLabelStore;
#[cfg(unix)]
pub use pipe::{AudacityPipe, PipePath};
