/// Primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` rowids.
pub type DbId = i64;

/// Timestamps are stored as ISO-8601 local time strings, second precision.
pub type Timestamp = String;

/// `strftime` pattern for [`Timestamp`] values (`2026-10-19T21:05:33`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current local time formatted as a [`Timestamp`]. Fractional seconds are dropped.
pub fn now_timestamp() -> Timestamp {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
