//! Application layer - Use cases and port interfaces
//!
//! Contains the export workflow and trait definitions
//! for external system interactions.

pub mod export_labels;
pub mod ports;

// Re-export use cases
pub use export_labels::{
    ExportCallbacks, ExportLabelsError, ExportLabelsInput, ExportLabelsOutput,
    ExportLabelsUseCase,
};
