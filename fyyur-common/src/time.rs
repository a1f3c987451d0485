//! Show start-time utilities
//!
//! Start times are stored as text in a single fixed format and compared
//! against local wall-clock time.

use chrono::{Local, NaiveDateTime};

use crate::{Error, Result};

/// Storage format of `Show.start_time`
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a stored start time
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), START_TIME_FORMAT).map_err(|e| {
        Error::InvalidInput(format!(
            "start_time {:?} does not match {}: {}",
            value, START_TIME_FORMAT, e
        ))
    })
}

/// Render a timestamp in the storage format
pub fn format_start_time(value: &NaiveDateTime) -> String {
    value.format(START_TIME_FORMAT).to_string()
}

/// True when a show starting at `start` has already started at `now`.
///
/// Exactly `now` counts as upcoming.
pub fn is_past(start: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    start < now
}

/// Display style for start times on rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
}

impl DisplayStyle {
    fn pattern(self) -> &'static str {
        match self {
            DisplayStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
            DisplayStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        }
    }
}

/// Format a stored start time for display, falling back to the raw text
pub fn display_start_time(value: &str, style: DisplayStyle) -> String {
    match parse_start_time(value) {
        Ok(parsed) => parsed.format(style.pattern()).to_string(),
        Err(_) => value.to_string(),
    }
}
