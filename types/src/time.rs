//! Timestamp type used when measuring elapsed time.
//!
//! Timestamps are Unix epoch seconds (UTC). They only exist so callers can
//! hand two clock readings to the relative-time formatter; nothing here is
//! calendar-aware.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    ///
    /// A system clock set before the epoch reads as [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Signed number of seconds from this timestamp to `later`.
    ///
    /// Negative when `later` actually precedes `self`.
    pub fn seconds_until(&self, later: Timestamp) -> i128 {
        i128::from(later.0) - i128::from(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_until_is_signed() {
        let a = Timestamp::new(100);
        let b = Timestamp::new(160);
        assert_eq!(a.seconds_until(b), 60);
        assert_eq!(b.seconds_until(a), -60);
        assert_eq!(a.seconds_until(a), 0);
    }

    #[test]
    fn seconds_until_spans_full_range() {
        let end = Timestamp::new(u64::MAX);
        assert_eq!(Timestamp::EPOCH.seconds_until(end), i128::from(u64::MAX));
        assert_eq!(end.seconds_until(Timestamp::EPOCH), -i128::from(u64::MAX));
    }

    #[test]
    fn now_is_after_epoch() {
        assert!(Timestamp::now() > Timestamp::EPOCH);
    }

    #[test]
    fn serializes_as_bare_seconds() {
        let ts = Timestamp::new(42);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "42");
        assert_eq!(ts.to_string(), "42s");
    }
}
