// src/utilities/timestamp.rs
//
// UTC timestamps for export filenames

use std::time::{SystemTime, UNIX_EPOCH};

/// Formats a time as an ISO 8601 UTC timestamp with millisecond precision,
/// e.g. `2023-11-14T22:13:20.123Z`. Times before the epoch clamp to the epoch.
pub fn iso8601_utc(time: SystemTime) -> String {
    let since_epoch = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = since_epoch.as_secs();
    let millis = since_epoch.subsec_millis();

    let days = (secs / 86_400) as i64;
    let secs_of_day = secs % 86_400;
    let (year, month, day) = civil_from_days(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        month,
        day,
        secs_of_day / 3600,
        (secs_of_day / 60) % 60,
        secs_of_day % 60,
        millis
    )
}

/// `kaleidoscope-<timestamp>.png` with ':' and '.' in the timestamp replaced by '-'
pub fn export_filename(time: SystemTime) -> String {
    let timestamp = iso8601_utc(time).replace([':', '.'], "-");
    format!("kaleidoscope-{}.png", timestamp)
}

// Days since 1970-01-01 to a proleptic Gregorian (year, month, day)
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11], March based
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
