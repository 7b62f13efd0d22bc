//! Week grid assembly: staff × week × day.

use crate::core::day::aggregate_day;
use crate::core::diagnostics::Diagnostics;
use crate::core::lookup::{HolidayLookup, LeaveColorLookup};
use crate::core::shift_builder::{build_shift, note_shift};
use crate::errors::{AppError, AppResult};
use crate::models::color::Palette;
use crate::models::day_cell::DayCell;
use crate::models::record::AttendanceRecord;
use crate::models::shift::Shift;
use crate::models::staff::StaffMember;
use crate::models::week::{DAYS_PER_WEEK, StaffWeekRow, WeekGroup, WeekInfo};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Switches that select a grid variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Keep zero-time holiday/leave records as cells of their own.
    pub include_marker_only_days: bool,
    /// Show calendar holidays on days that have no record at all.
    pub include_calendar_holidays: bool,
    /// Leave out staff rows without any data in that week.
    pub hide_empty_rows: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            include_marker_only_days: true,
            include_calendar_holidays: false,
            hide_empty_rows: false,
        }
    }
}

/// Everything the assembler needs besides the lookups.
#[derive(Debug, Clone, Copy)]
pub struct GridRequest<'a> {
    pub records: &'a [AttendanceRecord],
    pub roster: Option<&'a [StaffMember]>,
    pub weeks: &'a [WeekInfo],
    pub palette: Palette,
    pub options: GridOptions,
}

impl<'a> GridRequest<'a> {
    pub fn new(
        records: &'a [AttendanceRecord],
        roster: &'a [StaffMember],
        weeks: &'a [WeekInfo],
    ) -> Self {
        Self {
            records,
            roster: Some(roster),
            weeks,
            palette: Palette::default(),
            options: GridOptions::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub groups: Vec<WeekGroup>,
    pub diagnostics: Diagnostics,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn has_data(&self) -> bool {
        self.groups.iter().any(|g| g.has_data)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&WeekInfo, &StaffWeekRow)> {
        self.groups
            .iter()
            .flat_map(|g| g.rows.iter().map(move |r| (&g.week, r)))
    }
}

/// Shifts keyed by (roster position, date).
type ShiftIndex = HashMap<(usize, NaiveDate), Vec<Shift>>;

/// Builds the full grid.
///
/// Malformed records are counted in the diagnostics and never fail the call.
/// Only a missing roster is an error; empty records, staff or weeks give an
/// empty grid.
pub fn build_grid<L, H>(request: GridRequest<'_>, leaves: &L, holidays: &H) -> AppResult<Grid>
where
    L: LeaveColorLookup + ?Sized,
    H: HolidayLookup + ?Sized,
{
    let roster = request
        .roster
        .ok_or(AppError::MissingInput("staff roster"))?;

    let mut diagnostics = Diagnostics {
        total_records: request.records.len(),
        ..Diagnostics::default()
    };

    if request.records.is_empty() || roster.is_empty() || request.weeks.is_empty() {
        debug!(
            records = request.records.len(),
            staff = roster.len(),
            weeks = request.weeks.len(),
            "nothing to build"
        );
        return Ok(Grid {
            groups: Vec::new(),
            diagnostics,
        });
    }

    let index = index_shifts(&request, roster, leaves, holidays, &mut diagnostics);

    let mut order: Vec<usize> = (0..roster.len()).collect();
    order.sort_by(|&a, &b| roster[a].display_order(&roster[b]));

    let groups = request
        .weeks
        .iter()
        .map(|week| {
            let rows: Vec<StaffWeekRow> = order
                .iter()
                .map(|&m| build_row(m, &roster[m], week, &index, &request, holidays))
                .filter(|row| !request.options.hide_empty_rows || row.has_data())
                .collect();

            WeekGroup {
                has_data: rows.iter().any(StaffWeekRow::has_data),
                week: week.clone(),
                rows,
            }
        })
        .collect();

    debug!(
        accepted = diagnostics.accepted,
        rejected = diagnostics.rejected_total(),
        "grid built"
    );

    Ok(Grid {
        groups,
        diagnostics,
    })
}

/// Builds every record once and files the shift under its staff row and
/// date. Records that cannot be placed are counted. Rows only read
/// the index.
fn index_shifts<L, H>(
    request: &GridRequest<'_>,
    roster: &[StaffMember],
    leaves: &L,
    holidays: &H,
    diagnostics: &mut Diagnostics,
) -> ShiftIndex
where
    L: LeaveColorLookup + ?Sized,
    H: HolidayLookup + ?Sized,
{
    let staff_by_ref = staff_lookup(roster);
    let mut index = ShiftIndex::new();

    for record in request.records {
        let shift = match build_shift(record, leaves, holidays) {
            Ok(Some(shift)) => shift,
            Ok(None) => {
                diagnostics.dropped_empty += 1;
                continue;
            }
            Err(reason) => {
                debug!(record = %record.id, %reason, "skipping record");
                diagnostics.record_rejection(reason, &record.id);
                continue;
            }
        };

        diagnostics.accepted += 1;
        note_shift(&shift, diagnostics);

        let Some(&member) = staff_by_ref.get(shift.staff_id.as_str()) else {
            diagnostics.unknown_staff += 1;
            continue;
        };

        if !request.weeks.iter().any(|w| w.contains(shift.date)) {
            diagnostics.out_of_range += 1;
            continue;
        }

        if shift.marker_only && !request.options.include_marker_only_days {
            diagnostics.markers_hidden += 1;
            continue;
        }

        index.entry((member, shift.date)).or_default().push(shift);
    }

    index
}

/// Maps both staff id and employee reference to the roster position.
/// The first member claiming a reference keeps it.
fn staff_lookup(roster: &[StaffMember]) -> HashMap<&str, usize> {
    let mut map = HashMap::with_capacity(roster.len() * 2);

    for (i, member) in roster.iter().enumerate() {
        let keys = std::iter::once(member.id.as_str())
            .chain(member.employee_reference.as_deref())
            .map(str::trim)
            .filter(|k| !k.is_empty());

        for key in keys {
            if let Some(prev) = map.insert(key, i)
                && prev != i
            {
                debug!(reference = key, "staff reference used twice, keeping first");
                map.insert(key, prev);
            }
        }
    }

    map
}

fn build_row<H>(
    member_idx: usize,
    member: &StaffMember,
    week: &WeekInfo,
    index: &ShiftIndex,
    request: &GridRequest<'_>,
    holidays: &H,
) -> StaffWeekRow
where
    H: HolidayLookup + ?Sized,
{
    let days = std::array::from_fn(|i| {
        let date = week.week_start + Duration::days(i as i64);
        let shifts = index.get(&(member_idx, date)).cloned().unwrap_or_default();
        let calendar_holiday = request.options.include_calendar_holidays
            && shifts.is_empty()
            && holidays.is_holiday(date);

        aggregate_day(
            date,
            (i + 1) as u8,
            shifts,
            calendar_holiday,
            &request.palette,
        )
    });

    let weekly_total_minutes = weekly_total(&days);

    StaffWeekRow {
        staff: member.clone(),
        days,
        weekly_total_minutes,
    }
}

/// Sum of the seven day totals.
pub fn weekly_total(days: &[DayCell; DAYS_PER_WEEK]) -> i64 {
    days.iter().map(|d| d.total_minutes).sum()
}
