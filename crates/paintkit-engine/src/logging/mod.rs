//! Logging utilities.
//!
//! The library itself only emits through the `log` facade. This module
//! offers a one-shot `env_logger` setup for binaries.

mod init;

pub use init::{init_logging, LoggingConfig};
