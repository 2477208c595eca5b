//! aftercare-cli library root.
//!
//! Re-exports the host's modules so integration tests can drive a whole
//! conversation over in-memory streams without a terminal.

pub mod aws;
pub mod config;
pub mod intent;
pub mod repl;
