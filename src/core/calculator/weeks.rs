//! Calendar weeks overlapping a month, for a configurable week-start day.
//!
//! Weekdays are numbered 1 = Sunday ... 7 = Saturday.

use crate::models::week::{DAYS_PER_WEEK, WeekInfo};
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use tracing::warn;

/// Used whenever the configured week-start day is outside 1..=7.
pub const DEFAULT_WEEK_START_DAY: u8 = 1;

/// The weekday that opens every week in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekStart(u8);

impl WeekStart {
    pub const SUNDAY: WeekStart = WeekStart(1);
    pub const MONDAY: WeekStart = WeekStart(2);

    /// Clamps an out-of-range value to [`DEFAULT_WEEK_START_DAY`].
    pub fn from_config(day: i64) -> Self {
        match u8::try_from(day) {
            Ok(d @ 1..=7) => WeekStart(d),
            _ => {
                warn!(
                    week_start_day = day,
                    default = DEFAULT_WEEK_START_DAY,
                    "invalid week start day, using default"
                );
                WeekStart(DEFAULT_WEEK_START_DAY)
            }
        }
    }

    pub fn day(&self) -> u8 {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        weekday_from_number(self.0)
    }

    /// Position of `date` inside a week opened by this weekday, 0..=6.
    pub fn offset_of(&self, date: NaiveDate) -> u32 {
        let from_sunday = date.weekday().num_days_from_sunday();
        (from_sunday + 7 - (self.0 as u32 - 1)) % 7
    }

    /// 1-based day number of `date` inside its week.
    pub fn day_number_of(&self, date: NaiveDate) -> u8 {
        self.offset_of(date) as u8 + 1
    }

    /// Weekdays in column order, starting at this week-start day.
    pub fn ordered_weekdays(&self) -> Vec<Weekday> {
        (0..DAYS_PER_WEEK as u8)
            .map(|i| weekday_from_number((self.0 - 1 + i) % 7 + 1))
            .collect()
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart(DEFAULT_WEEK_START_DAY)
    }
}

/// 1 = Sunday ... 7 = Saturday. Values outside the range wrap.
pub fn weekday_from_number(day: u8) -> Weekday {
    match (day.wrapping_sub(1)) % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Sunday-based weekday number (1..=7) of a date.
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8 + 1
}

/// First and last day of the month containing `month_ref`.
pub fn month_bounds(month_ref: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = month_ref.with_day(1).unwrap_or(month_ref);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Every calendar week intersecting the month of `month_ref`, in order.
///
/// `week_start_day` outside 1..=7 falls back to [`DEFAULT_WEEK_START_DAY`].
pub fn calculate_weeks(month_ref: NaiveDate, week_start_day: i64) -> Vec<WeekInfo> {
    weeks_for_month(month_ref, WeekStart::from_config(week_start_day))
}

pub fn weeks_for_month(month_ref: NaiveDate, week_start: WeekStart) -> Vec<WeekInfo> {
    let (first, last) = month_bounds(month_ref);
    weeks_for_range(first, last, week_start)
}

/// Weeks covering an arbitrary inclusive date range.
pub fn weeks_for_range(first: NaiveDate, last: NaiveDate, week_start: WeekStart) -> Vec<WeekInfo> {
    if last < first {
        return Vec::new();
    }

    let days_in_range = (last - first).num_days() + 1;
    let leading = week_start.offset_of(first) as i64;
    let trailing = 6 - week_start.offset_of(last) as i64;
    let week_count = (days_in_range + leading + trailing + 6) / 7;

    let Some(first_start) = first.checked_sub_signed(Duration::days(leading)) else {
        warn!(%first, "week range starts before the earliest date");
        return Vec::new();
    };

    // Weeks that would run past the calendar's last date are left out.
    (0..week_count)
        .map_while(|i| {
            let week_start = first_start.checked_add_signed(Duration::days(i * 7))?;
            let week_end = week_start.checked_add_signed(Duration::days(6))?;
            let week_num = (i + 1) as u32;
            Some(WeekInfo {
                week_num,
                week_start,
                week_end,
                label: week_label(week_num, week_start, week_end),
            })
        })
        .collect()
}

pub fn week_label(week_num: u32, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "Week {} ({} - {})",
        week_num,
        start.format("%m/%d"),
        end.format("%m/%d")
    )
}

/// Picks one week by number, clamping the request into `1..=weeks.len()`.
pub fn select_week(weeks: &[WeekInfo], week_num: i64) -> Option<&WeekInfo> {
    if weeks.is_empty() {
        return None;
    }
    let idx = week_num.clamp(1, weeks.len() as i64) as usize - 1;
    if idx + 1 != week_num.max(0) as usize {
        warn!(
            requested = week_num,
            selected = idx + 1,
            "week number out of range, clamped"
        );
    }
    weeks.get(idx)
}
