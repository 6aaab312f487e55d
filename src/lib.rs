//! SoundLabeler - batch label generation for Audacity recordings
//!
//! This crate drives an already-running Audacity instance over its
//! mod-script-pipe interface to locate sound start/end regions in a wav file
//! and export them as a label track, renamed per input file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects (script commands, silence thresholds) and errors
//! - **Application**: The export workflow and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (named pipes, filesystem, config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
