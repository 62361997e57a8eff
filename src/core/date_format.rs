use crate::domain::model::TemporalValue;
use crate::utils::error::{Result, SiteError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::str::FromStr;

/// Long English month, unpadded day, full year: `January 5, 2024`.
pub const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Returned by [`format_date_lossy`] when the input does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

impl FromStr for TemporalValue {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(TemporalValue::DateTime(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Ok(TemporalValue::DateTime(dt));
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt.into());
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                return Ok(TemporalValue::Date(d));
            }
        }

        Err(SiteError::invalid_input(s, "unrecognized date format"))
    }
}

/// Formats a point in time for display, e.g. `January 5, 2024`.
///
/// Datetimes are rendered in their own offset; no conversion to the host
/// timezone takes place.
pub fn format_date(value: impl Into<TemporalValue>) -> String {
    value.into().date().format(DISPLAY_FORMAT).to_string()
}

/// Parses `text` and formats it, failing on unparseable input.
pub fn format_date_str(text: &str) -> Result<String> {
    let value: TemporalValue = text.parse()?;
    Ok(format_date(value))
}

/// Like [`format_date_str`] but yields [`INVALID_DATE`] instead of failing.
pub fn format_date_lossy(text: &str) -> String {
    format_date_str(text).unwrap_or_else(|e| {
        tracing::warn!("Could not format date: {}", e);
        INVALID_DATE.to_string()
    })
}
