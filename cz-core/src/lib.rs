//! ContentZen Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other ContentZen crates:
//! - Client configuration (base address, API token, timeout)
//! - A single error type covering precondition, transport, protocol and decode failures
//! - Structured logging with tracing
//! - Per-user directory lookup and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ClientConfig};
pub use error::{CzError, CzResult};
pub use logging::init_logging;
