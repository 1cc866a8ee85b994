//! Time utilities
//!
//! Timestamps are UTC, ISO 8601, microsecond precision, with no offset suffix.

use chrono::{DateTime, Utc};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Return the current UTC time as an ISO 8601 string
pub fn timestamp() -> String {
    format_timestamp(&Utc::now())
}

/// Format a UTC datetime as `YYYY-MM-DDTHH:MM:SS.ffffff`
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use osint_utils::utils::time::format_timestamp;
///
/// let dt = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 5).unwrap();
/// assert_eq!(format_timestamp(&dt), "2024-01-01T12:30:05.000000");
/// ```
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(ISO_FORMAT).to_string()
}
