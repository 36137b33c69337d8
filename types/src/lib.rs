//! Shared types for the shorthand workspace.
//!
//! This crate defines what every other crate in the workspace agrees on:
//! the precondition error returned by the pure encoders and formatters, and
//! the Unix-seconds timestamp used when measuring elapsed time.

pub mod error;
pub mod time;

pub use error::PreconditionViolation;
pub use time::Timestamp;
