//! Named-pipe scripting transport
//!
//! Audacity's mod-script-pipe provisions two fifos per user; this module
//! locates and drives them. Unix only.

mod unix_pipe;

pub use unix_pipe::{AudacityPipe, PipePath};
