//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// The public contract speaks milliseconds since the Unix epoch; the inner
/// representation is a chrono `DateTime<Utc>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// Out-of-range values saturate to the epoch.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH))
    }

    /// Returns the timestamp as milliseconds since the Unix epoch.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Returns whole milliseconds elapsed from `other` to this timestamp.
    pub fn millis_since(&self, other: &Timestamp) -> i64 {
        self.duration_since(other).num_milliseconds()
    }

    /// Creates a new timestamp by adding the specified number of milliseconds.
    pub fn plus_millis(&self, millis: i64) -> Self {
        Self(self.0 + Duration::milliseconds(millis))
    }

    /// Creates a new timestamp by adding the specified number of hours.
    pub fn plus_hours(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    /// Creates a new timestamp by subtracting the specified number of hours.
    pub fn minus_hours(&self, hours: i64) -> Self {
        Self(self.0 - Duration::hours(hours))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
