use super::clock::{ClockTime, LunchBreak};
use chrono::NaiveDate;
use serde::Serialize;

/// One raw attendance/leave/holiday entry for a staff member on one day.
///
/// `staff_id` and `date` are optional because malformed source rows still
/// travel through the pipeline until the shift builder rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub staff_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: ClockTime,
    pub end: ClockTime,
    pub lunch: Option<LunchBreak>,
    pub leave_type_id: Option<String>,
    pub holiday: bool,
}

impl AttendanceRecord {
    /// A plain work record without lunch, leave or holiday.
    pub fn work(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        date: NaiveDate,
        start: ClockTime,
        end: ClockTime,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: Some(staff_id.into()),
            date: Some(date),
            start,
            end,
            lunch: None,
            leave_type_id: None,
            holiday: false,
        }
    }

    /// A zero-time record carrying only a holiday and/or leave marker.
    pub fn marker(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        date: NaiveDate,
        holiday: bool,
        leave_type_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: Some(staff_id.into()),
            date: Some(date),
            start: ClockTime::ZERO,
            end: ClockTime::ZERO,
            lunch: None,
            leave_type_id,
            holiday,
        }
    }

    pub fn with_lunch(mut self, lunch: LunchBreak) -> Self {
        self.lunch = Some(lunch);
        self
    }

    pub fn with_leave(mut self, leave_type_id: impl Into<String>) -> Self {
        self.leave_type_id = Some(leave_type_id.into());
        self
    }

    pub fn with_holiday(mut self, holiday: bool) -> Self {
        self.holiday = holiday;
        self
    }

    /// Start and end both at `00:00`.
    pub fn is_marker_only(&self) -> bool {
        self.start.is_zero() && self.end.is_zero()
    }

    pub fn staff_ref(&self) -> Option<&str> {
        self.staff_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
