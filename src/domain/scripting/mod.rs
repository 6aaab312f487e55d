//! Scripting protocol value objects
//!
//! Audacity's mod-script-pipe speaks a line-oriented text protocol: one
//! command per line out, a blank-line-terminated blob of text back. The
//! types here pin the exact wire format of the commands this tool uses.

use std::fmt;
use std::path::{Path, PathBuf};

/// Silence-detection thresholds passed through to Audacity's SoundFinder.
///
/// `level` is the dB-relative level below which audio counts as silence,
/// `duration` the minimum silence duration. Both are forwarded verbatim as
/// `sil-lev` / `sil-dur`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilenceParams {
    pub level: u32,
    pub duration: u32,
}

impl SilenceParams {
    pub const DEFAULT_LEVEL: u32 = 12;
    pub const DEFAULT_DURATION: u32 = 100;

    pub fn new(level: u32, duration: u32) -> Self {
        Self { level, duration }
    }
}

impl Default for SilenceParams {
    fn default() -> Self {
        Self {
            level: Self::DEFAULT_LEVEL,
            duration: Self::DEFAULT_DURATION,
        }
    }
}

/// One scripting command. `Display` produces the exact wire text,
/// without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a fresh project window.
    New,
    /// Import an audio file into the current project.
    Import { filename: PathBuf },
    /// Select the whole track.
    SelectAll,
    /// Run silence detection, producing a label track.
    SoundFinder(SilenceParams),
    /// Export all labels to Audacity's default label file.
    ExportLabels,
}

impl Command {
    /// Import command for a wav file.
    pub fn import(filename: impl Into<PathBuf>) -> Self {
        Self::Import {
            filename: filename.into(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::New => write!(f, "New:"),
            Command::Import { filename } => {
                write!(f, "Import2: Filename={}", filename.display())
            }
            Command::SelectAll => write!(f, "SelectAll:"),
            Command::SoundFinder(params) => write!(
                f,
                "SoundFinder: sil-lev={} sil-dur={}",
                params.level, params.duration
            ),
            Command::ExportLabels => write!(f, "ExportLabels:"),
        }
    }
}

/// Opaque response text accumulated from the inbound pipe.
///
/// Audacity gives no structured reply, so this is kept verbatim and used for
/// logging only. The terminating blank line is not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    text: String,
}

impl Response {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Path of the wav file Audacity should import for `basename`.
pub fn wav_path(input_dir: &Path, basename: &str) -> PathBuf {
    input_dir.join(format!("{basename}.wav"))
}

/// Path the renamed label file should end up at for `basename`.
pub fn label_path(label_dir: &Path, basename: &str) -> PathBuf {
    label_dir.join(format!("{basename}.txt"))
}
