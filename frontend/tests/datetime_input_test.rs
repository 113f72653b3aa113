//! `datetime-local` value conversions and the detail-view date format. Expectations are
//! built in the host's local zone, so they hold wherever the tests run.

use chrono::{DateTime, Local, TimeZone, Utc};
use evently_frontend::datetime_input::{display, display_record_date, from_input_value, to_input_value};
use pretty_assertions::assert_eq;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn input_value_is_local_wall_clock_with_minute_precision() {
    let dt = local(2026, 6, 9, 7, 5) + chrono::Duration::seconds(42);
    assert_eq!(to_input_value(&dt), "2026-06-09T07:05");
}

#[test]
fn parses_browser_values_as_local_time() {
    let expected = local(2026, 6, 9, 18, 0);
    assert_eq!(from_input_value("2026-06-09T18:00"), Some(expected));
    assert_eq!(from_input_value(" 2026-06-09T18:00:00 "), Some(expected));
}

#[test]
fn entered_time_is_shown_back_unchanged() {
    let stored = from_input_value("2026-06-01T18:00").unwrap();
    assert_eq!(to_input_value(&stored), "2026-06-01T18:00");
    assert_eq!(stored.with_timezone(&Local).format("%H:%M").to_string(), "18:00");
}

#[test]
fn cleared_or_garbled_input_is_none() {
    assert_eq!(from_input_value(""), None);
    assert_eq!(from_input_value("09.03.2026 07:05"), None);
    assert_eq!(from_input_value("2026-13-01T00:00"), None);
}

#[test]
fn display_uses_day_month_year_and_twelve_hour_clock() {
    assert_eq!(display(&local(2026, 6, 1, 18, 30)), "01.06.2026 6:30 PM");
}

#[test]
fn record_dates_are_displayed_in_local_time() {
    let raw = local(2026, 6, 1, 10, 0).to_rfc3339();
    assert_eq!(display_record_date(&raw), "01.06.2026 10:00 AM");
    assert_eq!(display_record_date("soon"), "soon");
}
