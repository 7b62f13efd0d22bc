use super::day_cell::DayCell;
use super::staff::StaffMember;
use chrono::NaiveDate;
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekInfo {
    /// 1-based position within the month view.
    pub week_num: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub label: String,
}

impl WeekInfo {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.week_start.iter_days().take(DAYS_PER_WEEK)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffWeekRow {
    pub staff: StaffMember,
    pub days: [DayCell; DAYS_PER_WEEK],
    pub weekly_total_minutes: i64,
}

impl StaffWeekRow {
    pub fn has_data(&self) -> bool {
        self.days.iter().any(|d| d.has_data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGroup {
    pub week: WeekInfo,
    pub rows: Vec<StaffWeekRow>,
    pub has_data: bool,
}
