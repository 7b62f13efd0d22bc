use crate::core::calculator::weeks::{WeekStart, select_week, weeks_for_month};
use crate::core::diagnostics::Diagnostics;
use crate::core::grid::{Grid, GridOptions, GridRequest, build_grid};
use crate::core::lookup::{HolidayLookup, LeaveColorLookup};
use crate::core::shift_builder::build_shifts;
use crate::errors::AppResult;
use crate::models::color::Palette;
use crate::models::record::AttendanceRecord;
use crate::models::staff::StaffMember;
use crate::models::week::WeekInfo;
use chrono::NaiveDate;

/// Which part of the calendar to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelection {
    pub month: NaiveDate,
    pub week_start: WeekStart,
    /// Restrict the view to one week of the month (clamped to the valid range).
    pub week: Option<i64>,
}

impl MonthSelection {
    pub fn new(month: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            month,
            week_start,
            week: None,
        }
    }

    pub fn only_week(mut self, week: i64) -> Self {
        self.week = Some(week);
        self
    }
}

pub struct Core;

impl Core {
    /// Weeks for a selection: the whole month, or the one requested week.
    pub fn weeks(selection: &MonthSelection) -> Vec<WeekInfo> {
        let weeks = weeks_for_month(selection.month, selection.week_start);
        match selection.week {
            None => weeks,
            Some(n) => select_week(&weeks, n).cloned().into_iter().collect(),
        }
    }

    /// Month grid in one call: weeks, then the full assembly.
    pub fn build_month<L, H>(
        records: &[AttendanceRecord],
        roster: Option<&[StaffMember]>,
        selection: &MonthSelection,
        palette: Palette,
        options: GridOptions,
        leaves: &L,
        holidays: &H,
    ) -> AppResult<Grid>
    where
        L: LeaveColorLookup + ?Sized,
        H: HolidayLookup + ?Sized,
    {
        let weeks = Self::weeks(selection);
        let request = GridRequest {
            records,
            roster,
            weeks: &weeks,
            palette,
            options,
        };
        build_grid(request, leaves, holidays)
    }

    /// Record-level checks only, without a roster or week layout.
    pub fn diagnose<L, H>(records: &[AttendanceRecord], leaves: &L, holidays: &H) -> Diagnostics
    where
        L: LeaveColorLookup + ?Sized,
        H: HolidayLookup + ?Sized,
    {
        let mut diagnostics = Diagnostics {
            total_records: records.len(),
            ..Diagnostics::default()
        };
        let shifts = build_shifts(records, leaves, holidays, &mut diagnostics);
        diagnostics.accepted = shifts.len();
        diagnostics
    }
}
