//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade.
//! Recoverable input errors (unknown mode or palette names) warn through
//! here; per-frame paths stay silent at info level.

mod init;

pub use init::{init_logging, LoggingConfig};
