use super::clock::ClockTime;
use super::color::Rgb;
use chrono::NaiveDate;
use serde::Serialize;

/// Leave data attached to a shift. `title` and `color` stay empty when the
/// leave type id is not known to the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveAnnotation {
    pub id: String,
    pub title: Option<String>,
    pub color: Option<Rgb>,
}

impl LeaveAnnotation {
    /// Resolved title, or the raw id when the lookup had no entry.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

/// A validated, immutable piece of a day built from exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub record_id: String,
    pub staff_id: String,
    pub date: NaiveDate,
    pub start: ClockTime,
    pub end: ClockTime,
    pub raw_minutes: i64,
    pub lunch_minutes: i64,
    pub work_minutes: i64,
    pub leave: Option<LeaveAnnotation>,
    pub holiday: bool,
    pub marker_only: bool,
    pub label: String,
}

impl Shift {
    pub fn leave_color(&self) -> Option<Rgb> {
        self.leave.as_ref().and_then(|l| l.color)
    }

    pub fn has_leave(&self) -> bool {
        self.leave.is_some()
    }

    /// Display order within a day: work shifts by start time, markers last.
    pub fn order_key(&self) -> (bool, i64) {
        (self.marker_only, self.start.total_minutes())
    }
}
