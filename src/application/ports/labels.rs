//! Label file collection port interface

use std::io;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from label collection
#[derive(Debug, Error)]
pub enum LabelStoreError {
    #[error("Label export not found at {path} after {timeout_secs}s; did ExportLabels fail?")]
    NotFound { path: String, timeout_secs: u64 },

    #[error("Label export at {path} was still changing after {timeout_secs}s")]
    Unstable { path: String, timeout_secs: u64 },

    #[error("Failed to move label file: {0}")]
    Io(#[from] io::Error),
}

/// Port for collecting the exported label file.
///
/// ExportLabels gives no completion signal, so the adapter is responsible
/// for deciding when the file at `source` is ready before moving it to
/// `dest`. Must not create `dest` if `source` never appears.
#[async_trait]
pub trait LabelStore: Send + Sync {
    async fn collect(&self, source: &Path, dest: &Path) -> Result<(), LabelStoreError>;
}
