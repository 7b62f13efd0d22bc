use super::color::{ColorResolution, Palette};
use super::shift::Shift;
use crate::core::priority::resolve_day;
use chrono::NaiveDate;
use serde::Serialize;

/// One staff member's day inside a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Position inside the week, 1..=7 starting at the week-start day.
    pub day_number: u8,
    /// Calendar weekday, 1 = Sunday ... 7 = Saturday.
    pub weekday: u8,
    pub shifts: Vec<Shift>,
    pub total_minutes: i64,
    pub has_data: bool,
    pub has_holiday: bool,
    pub has_leave: bool,
    /// Holiday coming from the holiday calendar with no record behind it.
    pub calendar_holiday: bool,
    pub color: ColorResolution,
    pub text: String,
}

impl DayCell {
    /// Titles of every leave on this day, even when the holiday tier decided
    /// the color.
    pub fn leave_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = Vec::new();
        for leave in self.shifts.iter().filter_map(|s| s.leave.as_ref()) {
            let t = leave.display_title();
            if !titles.contains(&t) {
                titles.push(t);
            }
        }
        titles
    }

    pub fn is_marker_only(&self) -> bool {
        self.has_data && self.shifts.iter().all(|s| s.marker_only)
    }

    /// Re-runs the color decision from the cell's own contents.
    pub fn resolve_color(&self, palette: &Palette) -> ColorResolution {
        resolve_day(&self.shifts, self.calendar_holiday, palette)
    }
}
