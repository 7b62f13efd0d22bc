//! Clock-time interval arithmetic: durations across midnight, lunch
//! subtraction and the two display formats used by the grid.

use crate::models::clock::{ClockTime, LunchBreak, MINUTES_PER_DAY};

/// Minutes between two wall-clock times.
///
/// - `00:00 → 00:00` is the "no work time" sentinel and yields 0.
/// - When the end is not after the start the interval wraps past midnight.
pub fn duration_minutes(start_h: i32, start_m: i32, end_h: i32, end_m: i32) -> i64 {
    between(ClockTime::new(start_h, start_m), ClockTime::new(end_h, end_m))
}

/// Same as [`duration_minutes`] on `ClockTime` values.
pub fn between(start: ClockTime, end: ClockTime) -> i64 {
    if start.is_zero() && end.is_zero() {
        return 0;
    }

    let s = start.total_minutes();
    let e = end.total_minutes();

    if e <= s {
        (MINUTES_PER_DAY - s) + e
    } else {
        e - s
    }
}

/// Minutes to subtract for lunch.
///
/// An explicit positive duration is used as-is; otherwise a lunch window
/// that is not `00:00-00:00` is measured with the midnight-aware formula.
pub fn lunch_minutes(lunch: Option<&LunchBreak>) -> i64 {
    let Some(lunch) = lunch else {
        return 0;
    };

    if let Some(m) = lunch.minutes
        && m > 0
    {
        return m as i64;
    }

    lunch
        .effective_window()
        .map(|(s, e)| between(s, e))
        .unwrap_or(0)
}

/// `max(0, raw - lunch)`.
pub fn work_minutes(raw_minutes: i64, lunch_minutes: i64) -> i64 {
    (raw_minutes - lunch_minutes).max(0)
}

/// Total format: `7h 30m`, `0h 00m`, `41h 05m`.
pub fn format_total(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}h {:02}m", m / 60, m % 60)
}

/// Compact duration used inside shift labels: `7:30`.
pub fn format_duration_short(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}:{:02}", m / 60, m % 60)
}

/// Shift label: `09:00-17:00(7:30)`.
pub fn format_shift_label(start: ClockTime, end: ClockTime, work_minutes: i64) -> String {
    format!("{start}-{end}({})", format_duration_short(work_minutes))
}
