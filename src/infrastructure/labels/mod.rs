//! Filesystem label store adapter

use std::io;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;
use tokio::time::Instant;

use crate::application::ports::{LabelStore, LabelStoreError};

/// Collects the exported label file by polling for it.
///
/// ExportLabels is fire-and-forget: Audacity writes the file some time after
/// acknowledging the command. Instead of sleeping a fixed duration and
/// racing the write, poll until the file exists and its size is unchanged
/// across two consecutive polls, capped by a timeout.
pub struct FsLabelStore {
    timeout: Duration,
    poll_interval: Duration,
}

impl FsLabelStore {
    const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

    /// Create a store that waits up to `timeout` for the export to settle
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll interval (used by tests to keep timeouts short)
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

#[async_trait]
impl LabelStore for FsLabelStore {
    async fn collect(&self, source: &Path, dest: &Path) -> Result<(), LabelStoreError> {
        let deadline = Instant::now() + self.timeout;
        let mut last_len: Option<u64> = None;

        loop {
            match fs::metadata(source).await {
                Ok(meta) => {
                    let len = meta.len();
                    if last_len == Some(len) {
                        fs::rename(source, dest).await?;
                        return Ok(());
                    }
                    last_len = Some(len);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    last_len = None;
                }
                Err(e) => return Err(e.into()),
            }

            if Instant::now() >= deadline {
                let path = source.display().to_string();
                let timeout_secs = self.timeout.as_secs();
                return Err(match last_len {
                    Some(_) => LabelStoreError::Unstable { path, timeout_secs },
                    None => LabelStoreError::NotFound { path, timeout_secs },
                });
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
