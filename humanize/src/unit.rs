//! Time units and the bucketing rule that picks one.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTE: u128 = 60;
pub const HOUR: u128 = 60 * MINUTE;
pub const DAY: u128 = 24 * HOUR;
/// Fixed month length: 30.42 days.
pub const MONTH: u128 = 2_628_288;
/// Fixed non-leap year length.
pub const YEAR: u128 = 365 * DAY;

/// A unit an elapsed time can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Every unit, smallest first.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Seconds per unit.
    pub fn divisor(self) -> u128 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Month => MONTH,
            TimeUnit::Year => YEAR,
        }
    }

    /// Largest elapsed-seconds value still expressed in this unit.
    ///
    /// Inclusive, so an exact boundary stays in the smaller unit: 60 seconds
    /// is `"60 seconds"`, not `"1 minute"`. Years have no upper bound.
    pub fn upper_bound(self) -> Option<u128> {
        match self {
            TimeUnit::Second => Some(MINUTE),
            TimeUnit::Minute => Some(HOUR),
            TimeUnit::Hour => Some(DAY),
            TimeUnit::Day => Some(MONTH),
            TimeUnit::Month => Some(YEAR),
            TimeUnit::Year => None,
        }
    }

    /// Pick the unit for `seconds` and the floored count in that unit.
    pub fn bucket(seconds: u128) -> (u128, TimeUnit) {
        let unit = Self::ALL
            .into_iter()
            .find(|unit| unit.upper_bound().map_or(true, |bound| seconds <= bound))
            .unwrap_or(TimeUnit::Year);
        (seconds / unit.divisor(), unit)
    }

    pub fn singular(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}
