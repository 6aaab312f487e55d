//! CLI argument definitions using Clap

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::domain::scripting::SilenceParams;

/// SoundLabeler - generate Audacity label files for voice recordings
#[derive(Parser, Debug)]
#[command(name = "sound-labeler")]
#[command(version)]
#[command(
    about = "Generate sound start/end label files by driving Audacity over mod-script-pipe"
)]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Base name of the wav file to label, without extension (e.g. sample1)
    #[arg(value_name = "BASENAME", required = true)]
    pub basename: Option<String>,

    /// Directory holding the input wav files
    #[arg(short = 'i', long, value_name = "DIR", env = "SOUND_LABELER_INPUT_DIR")]
    pub input_dir: Option<String>,

    /// Directory Audacity exports labels to
    #[arg(short = 'l', long, value_name = "DIR", env = "SOUND_LABELER_LABEL_DIR")]
    pub label_dir: Option<String>,

    /// Silence level threshold passed to SoundFinder (dB-relative)
    #[arg(long, value_name = "LEVEL", env = "SOUND_LABELER_SIL_LEV")]
    pub sil_lev: Option<u32>,

    /// Minimum silence duration passed to SoundFinder
    #[arg(long, value_name = "DUR", env = "SOUND_LABELER_SIL_DUR")]
    pub sil_dur: Option<u32>,

    /// Seconds to wait for the exported label file
    #[arg(long, value_name = "SECS", env = "SOUND_LABELER_EXPORT_TIMEOUT")]
    pub export_timeout: Option<u64>,

    /// Seconds to wait for each command response
    #[arg(long, value_name = "SECS", env = "SOUND_LABELER_RESPONSE_TIMEOUT")]
    pub response_timeout: Option<u64>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Fully resolved options for a single export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub basename: String,
    pub input_dir: PathBuf,
    pub label_dir: PathBuf,
    pub export_filename: String,
    pub silence: SilenceParams,
    pub export_timeout: Duration,
    pub response_timeout: Duration,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "input_dir",
    "label_dir",
    "export_filename",
    "sil_lev",
    "sil_dur",
    "export_timeout_secs",
    "response_timeout_secs",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
