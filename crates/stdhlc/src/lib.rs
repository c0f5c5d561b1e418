//! Stdhl CLI library.
//!
//! Holds everything behind the `stdhl` binary so it can be tested without
//! spawning a process:
//! - [`options`]: codec settings layered from defaults, environment and flags
//! - [`commands`]: the `encode`, `decode`, `digit` and `tables` handlers
//! - [`init_tracing`]: opt-in hierarchical logging

pub mod commands;
pub mod options;
mod tracing_setup;

pub use commands::CommandError;
pub use options::{CodecOptions, OptionsError};
pub use tracing_setup::init_tracing;
