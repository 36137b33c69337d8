//! Shared utilities for shorthand host applications.

pub mod keys;
pub mod logging;

pub use keys::stringify_keys;
pub use logging::{init_logging, LogFormat, LoggingError};
