use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Wall-clock time as raw hour/minute integers.
///
/// Values come straight from the record source and are not range-checked on
/// construction; `is_valid` is the gate used by the shift builder.
/// `00:00` doubles as the "no work time" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
}

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime { hour: 0, minute: 0 };

    pub const fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    pub fn is_zero(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }

    pub fn is_valid(&self) -> bool {
        (0..24).contains(&self.hour) && (0..60).contains(&self.minute)
    }

    /// Minutes since midnight.
    pub fn total_minutes(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Lunch break attached to a record.
///
/// An explicit `minutes` value greater than zero wins over the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchBreak {
    #[serde(default)]
    pub minutes: Option<i32>,
    #[serde(default)]
    pub start: Option<ClockTime>,
    #[serde(default)]
    pub end: Option<ClockTime>,
}

impl LunchBreak {
    pub fn minutes(minutes: i32) -> Self {
        Self {
            minutes: Some(minutes),
            ..Self::default()
        }
    }

    pub fn window(start: ClockTime, end: ClockTime) -> Self {
        Self {
            minutes: None,
            start: Some(start),
            end: Some(end),
        }
    }

    /// The lunch window, when both ends are present and not both `00:00`.
    pub fn effective_window(&self) -> Option<(ClockTime, ClockTime)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) if !(s.is_zero() && e.is_zero()) => Some((s, e)),
            _ => None,
        }
    }
}
