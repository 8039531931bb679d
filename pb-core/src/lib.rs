//! Pushbullet Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the Pushbullet client crates:
//! - Configuration (access token, API base URL, timeouts)
//! - Unified error types covering all error categories
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, PushbulletConfig};
pub use error::{PbError, PbResult};
pub use logging::init_logging;
