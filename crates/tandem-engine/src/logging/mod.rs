//! Logging utilities.
//!
//! Centralizes logger initialization (`log` facade, `env_logger` backend) and the
//! process-wide error reporter that routes panics from either thread into the log.

mod init;
mod reporter;

pub use init::{init_logging, LoggingConfig};
pub use reporter::ErrorReporter;

pub(crate) use reporter::panic_message;
