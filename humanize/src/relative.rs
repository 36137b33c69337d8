//! `"N units ago"` phrases.

use std::time::Duration;

use shorthand_types::{PreconditionViolation, Timestamp};

use crate::grouping::group_thousands;
use crate::plural::pluralize;
use crate::unit::TimeUnit;

/// Delimiter used to group the digits of large year counts.
pub const DEFAULT_DELIMITER: &str = ",";

/// Describe `seconds` of elapsed time, grouping year counts with `,`.
///
/// ```
/// use shorthand_humanize::format_relative_time;
///
/// assert_eq!(format_relative_time(1800).unwrap(), "30 minutes ago");
/// assert!(format_relative_time(-1).is_err());
/// ```
pub fn format_relative_time(seconds: i128) -> Result<String, PreconditionViolation> {
    format_relative_time_with(seconds, DEFAULT_DELIMITER)
}

/// Like [`format_relative_time`] with a caller-chosen grouping delimiter.
///
/// Only year counts are grouped; seconds through months never are.
pub fn format_relative_time_with(
    seconds: i128,
    delimiter: &str,
) -> Result<String, PreconditionViolation> {
    Ok(phrase(check_seconds(seconds)?, delimiter))
}

/// Formatter bound to a grouping delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelativeTimeFormatter {
    delimiter: String,
}

impl RelativeTimeFormatter {
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Describe `seconds`, rejecting negative values.
    pub fn format(&self, seconds: i128) -> Result<String, PreconditionViolation> {
        Ok(self.format_secs(check_seconds(seconds)?))
    }

    pub fn format_secs(&self, seconds: u128) -> String {
        phrase(seconds, &self.delimiter)
    }

    /// Describe a measured duration. Sub-second precision is dropped.
    pub fn format_duration(&self, elapsed: Duration) -> String {
        self.format_secs(u128::from(elapsed.as_secs()))
    }

    /// Describe the time between two clock readings.
    ///
    /// `then` after `now` means negative elapsed time and is rejected.
    pub fn format_since(
        &self,
        then: Timestamp,
        now: Timestamp,
    ) -> Result<String, PreconditionViolation> {
        self.format(then.seconds_until(now))
    }
}

impl Default for RelativeTimeFormatter {
    fn default() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }
}

fn check_seconds(seconds: i128) -> Result<u128, PreconditionViolation> {
    u128::try_from(seconds).map_err(|_| PreconditionViolation::NegativeSeconds(seconds))
}

fn phrase(seconds: u128, delimiter: &str) -> String {
    let (count, unit) = TimeUnit::bucket(seconds);
    let count_text = match unit {
        TimeUnit::Year => group_thousands(count, delimiter),
        _ => count.to_string(),
    };
    format!("{} {} ago", count_text, pluralize(count, unit.singular()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds() {
        assert_eq!(format_relative_time(0).unwrap(), "0 seconds ago");
        assert_eq!(format_relative_time(1).unwrap(), "1 second ago");
        assert_eq!(format_relative_time(2).unwrap(), "2 seconds ago");
        assert_eq!(format_relative_time(30).unwrap(), "30 seconds ago");
        assert_eq!(format_relative_time(60).unwrap(), "60 seconds ago");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(format_relative_time(61).unwrap(), "1 minute ago");
        assert_eq!(format_relative_time(1_800).unwrap(), "30 minutes ago");
        assert_eq!(format_relative_time(3_600).unwrap(), "60 minutes ago");
        assert_eq!(format_relative_time(3_601).unwrap(), "1 hour ago");
        assert_eq!(format_relative_time(32_400).unwrap(), "9 hours ago");
        assert_eq!(format_relative_time(86_400).unwrap(), "24 hours ago");
    }

    #[test]
    fn days_months_years() {
        assert_eq!(format_relative_time(86_401).unwrap(), "1 day ago");
        assert_eq!(format_relative_time(604_800).unwrap(), "7 days ago");
        assert_eq!(format_relative_time(3_888_000).unwrap(), "1 month ago");
        assert_eq!(format_relative_time(43_200_000).unwrap(), "1 year ago");
        assert_eq!(format_relative_time(63_072_000).unwrap(), "2 years ago");
    }

    #[test]
    fn large_year_counts_are_grouped() {
        assert_eq!(
            format_relative_time(45_648_023_834_783).unwrap(),
            "1,447,489 years ago"
        );
        assert_eq!(
            format_relative_time_with(45_648_023_834_783, "-").unwrap(),
            "1-447-489 years ago"
        );
    }

    #[test]
    fn smaller_units_are_never_grouped() {
        // 30 days in seconds: still under the month bound, stays ungrouped
        assert_eq!(
            format_relative_time_with(2_592_000, "-").unwrap(),
            "30 days ago"
        );
    }

    #[test]
    fn negative_seconds_rejected() {
        assert_eq!(
            format_relative_time(-1),
            Err(PreconditionViolation::NegativeSeconds(-1))
        );
        assert_eq!(
            format_relative_time_with(i128::MIN, "-"),
            Err(PreconditionViolation::NegativeSeconds(i128::MIN))
        );
    }

    #[test]
    fn formatter_uses_its_delimiter() {
        let formatter = RelativeTimeFormatter::with_delimiter(".");
        assert_eq!(formatter.delimiter(), ".");
        assert_eq!(
            formatter.format(45_648_023_834_783).unwrap(),
            "1.447.489 years ago"
        );
        assert_eq!(RelativeTimeFormatter::default().delimiter(), ",");
    }

    #[test]
    fn format_duration_drops_subseconds() {
        let formatter = RelativeTimeFormatter::default();
        assert_eq!(
            formatter.format_duration(Duration::from_millis(1_999)),
            "1 second ago"
        );
        assert_eq!(
            formatter.format_duration(Duration::from_secs(32_400)),
            "9 hours ago"
        );
    }

    #[test]
    fn format_since_measures_between_readings() {
        let formatter = RelativeTimeFormatter::default();
        let then = Timestamp::new(1_000);
        let now = Timestamp::new(1_000 + 604_800);
        assert_eq!(formatter.format_since(then, now).unwrap(), "7 days ago");
        assert_eq!(
            formatter.format_since(now, then),
            Err(PreconditionViolation::NegativeSeconds(-604_800))
        );
    }
}
