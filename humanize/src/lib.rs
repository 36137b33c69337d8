//! Relative-time humanizing.
//!
//! Converts an elapsed number of seconds into an English phrase such as
//! `"9 hours ago"` or `"1,447,489 years ago"`. Months and years are fixed
//! lengths in seconds, not calendar-aware.

pub mod grouping;
pub mod plural;
pub mod relative;
pub mod unit;

pub use grouping::group_thousands;
pub use plural::pluralize;
pub use relative::{
    format_relative_time, format_relative_time_with, RelativeTimeFormatter, DEFAULT_DELIMITER,
};
pub use shorthand_types::{PreconditionViolation, Timestamp};
pub use unit::TimeUnit;
