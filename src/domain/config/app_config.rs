//! Application configuration value object

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::scripting::SilenceParams;

/// Audacity's default name for an exported label track.
pub const DEFAULT_EXPORT_FILENAME: &str = "Label Track.txt";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the input `{basename}.wav` files
    pub input_dir: Option<String>,
    /// Directory Audacity exports labels to, and where renamed files land
    pub label_dir: Option<String>,
    /// Filename Audacity writes on ExportLabels
    pub export_filename: Option<String>,
    /// SoundFinder silence level threshold (dB-relative)
    pub sil_lev: Option<u32>,
    /// SoundFinder minimum silence duration
    pub sil_dur: Option<u32>,
    /// How long to wait for the exported label file
    pub export_timeout_secs: Option<u64>,
    /// How long to wait for a single command response
    pub response_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            input_dir: Some(".".to_string()),
            label_dir: Some(".".to_string()),
            export_filename: Some(DEFAULT_EXPORT_FILENAME.to_string()),
            sil_lev: Some(SilenceParams::DEFAULT_LEVEL),
            sil_dur: Some(SilenceParams::DEFAULT_DURATION),
            export_timeout_secs: Some(10),
            response_timeout_secs: Some(30),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            input_dir: other.input_dir.or(self.input_dir),
            label_dir: other.label_dir.or(self.label_dir),
            export_filename: other.export_filename.or(self.export_filename),
            sil_lev: other.sil_lev.or(self.sil_lev),
            sil_dur: other.sil_dur.or(self.sil_dur),
            export_timeout_secs: other.export_timeout_secs.or(self.export_timeout_secs),
            response_timeout_secs: other.response_timeout_secs.or(self.response_timeout_secs),
        }
    }

    /// Get input directory, or the current directory if not set
    pub fn input_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.input_dir.as_deref().unwrap_or("."))
    }

    /// Get label directory, or the current directory if not set
    pub fn label_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.label_dir.as_deref().unwrap_or("."))
    }

    /// Get export filename, or Audacity's default if not set
    pub fn export_filename_or_default(&self) -> &str {
        self.export_filename
            .as_deref()
            .unwrap_or(DEFAULT_EXPORT_FILENAME)
    }

    /// Get silence thresholds, filling unset fields from defaults
    pub fn silence_or_default(&self) -> SilenceParams {
        SilenceParams::new(
            self.sil_lev.unwrap_or(SilenceParams::DEFAULT_LEVEL),
            self.sil_dur.unwrap_or(SilenceParams::DEFAULT_DURATION),
        )
    }

    /// Get export wait timeout, or 10s if not set
    pub fn export_timeout_or_default(&self) -> Duration {
        Duration::from_secs(self.export_timeout_secs.unwrap_or(10))
    }

    /// Get response timeout, or 30s if not set
    pub fn response_timeout_or_default(&self) -> Duration {
        Duration::from_secs(self.response_timeout_secs.unwrap_or(30))
    }
}
