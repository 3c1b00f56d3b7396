// Time engine - wall-clock derivation from a UTC instant and a fixed offset
use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};

/// Rotation of the three clock hands in degrees, `[0, 360)`.
///
/// Recomputed from scratch on every tick; there is no persistent identity
/// behind these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAngles {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

/// Local wall-clock time for a city with a fixed UTC offset.
///
/// The offset is applied exactly once: the shifted instant is returned as a
/// naive date-time, so downstream formatting never layers the host timezone
/// on top of it. Negative, fractional and out-of-range offsets all take the
/// same path. DST is not derived here; the data source's advisory flags are
/// taken as given.
pub fn local_time(now_utc: DateTime<Utc>, offset_hours: f64) -> NaiveDateTime {
    let offset_secs = (offset_hours * 3600.0).round() as i64;
    (now_utc + Duration::seconds(offset_secs)).naive_utc()
}

/// Format a wall-clock time as `HH:MM:SS` (24h) or `H:MM:SS AM|PM` (12h).
pub fn format_clock(local: NaiveDateTime, use_24_hour: bool) -> String {
    if use_24_hour {
        local.format("%H:%M:%S").to_string()
    } else {
        local.format("%-I:%M:%S %p").to_string()
    }
}

/// Format a wall-clock date as e.g. `Mon, Jan 1`.
pub fn format_date(local: NaiveDateTime) -> String {
    local.format("%a, %b %-d").to_string()
}

/// Derive hand angles from a wall-clock time.
///
/// The hour and minute formulas carry the fractional contribution of the
/// smaller unit so hands sweep between positions instead of snapping.
pub fn angles(local: NaiveDateTime) -> ClockAngles {
    let hour = (local.hour() % 12) as f64;
    let minute = local.minute() as f64;
    let second = local.second() as f64;

    ClockAngles {
        hours: hour * 30.0 + minute * 0.5,
        minutes: minute * 6.0 + second * 0.1,
        seconds: second * 6.0,
    }
}
