//! Conversions between UTC instants and the `datetime-local` input's value format.
//! The input shows the user's wall-clock time, so values go through `Local`.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %-I:%M %p";

pub fn to_input_value(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format(INPUT_FORMAT).to_string()
}

/// Accepts minutes (what browsers send) or seconds precision. `None` for anything else,
/// including the empty string a cleared input reports and wall-clock times skipped by a
/// DST change. An ambiguous time resolves to the earlier instant.
pub fn from_input_value(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

pub fn display(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
}

/// Display form of an RFC 3339 record date; unparseable values are shown as-is.
pub fn display_record_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| display(&dt.with_timezone(&Utc)))
        .unwrap_or_else(|_| raw.to_string())
}
