use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a reading-time estimate, as consumed by "N min read" badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEstimate {
    pub minutes: u64,
    /// Always in `0..60`.
    pub seconds: u64,
    pub text: String,
}

impl ReadingEstimate {
    pub fn total_seconds(&self) -> u64 {
        self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for ReadingEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A point in time accepted by the date formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl TemporalValue {
    pub fn date(&self) -> NaiveDate {
        match self {
            TemporalValue::Date(d) => *d,
            TemporalValue::DateTime(dt) => dt.date_naive(),
        }
    }
}

impl From<NaiveDate> for TemporalValue {
    fn from(date: NaiveDate) -> Self {
        TemporalValue::Date(date)
    }
}

impl From<NaiveDateTime> for TemporalValue {
    fn from(dt: NaiveDateTime) -> Self {
        TemporalValue::DateTime(dt.and_utc().fixed_offset())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TemporalValue {
    fn from(dt: DateTime<Tz>) -> Self {
        TemporalValue::DateTime(dt.fixed_offset())
    }
}
