//! Record → Shift conversion.

use crate::core::calculator::interval::{between, format_shift_label, lunch_minutes, work_minutes};
use crate::core::diagnostics::{Diagnostics, RejectReason};
use crate::core::lookup::{HolidayLookup, LeaveColorLookup};
use crate::models::record::AttendanceRecord;
use crate::models::shift::{LeaveAnnotation, Shift};
use tracing::debug;

/// Text shown for a holiday with no work time.
pub const HOLIDAY_TEXT: &str = "Holiday";

/// Range checks, in the order they are reported.
pub fn validate_record(record: &AttendanceRecord) -> Result<(), RejectReason> {
    if record.staff_ref().is_none() {
        return Err(RejectReason::MissingStaff);
    }
    if record.date.is_none() {
        return Err(RejectReason::InvalidDate);
    }
    if !record.start.is_valid() {
        return Err(RejectReason::StartOutOfRange);
    }
    if !record.end.is_valid() {
        return Err(RejectReason::EndOutOfRange);
    }
    if let Some(lunch) = &record.lunch {
        let bad_window = [lunch.start, lunch.end]
            .into_iter()
            .flatten()
            .any(|t| !t.is_valid());
        if bad_window {
            return Err(RejectReason::LunchOutOfRange);
        }
    }
    Ok(())
}

/// Builds the shift for one record.
///
/// - `Err(reason)`: the record is malformed and must be skipped and counted.
/// - `Ok(None)`: a zero-time record with neither holiday nor leave.
/// - `Ok(Some(shift))`: a work shift or a marker-only shift.
///
/// A holiday flag on a record with real work time is accepted as-is.
pub fn build_shift<L, H>(
    record: &AttendanceRecord,
    leaves: &L,
    holidays: &H,
) -> Result<Option<Shift>, RejectReason>
where
    L: LeaveColorLookup + ?Sized,
    H: HolidayLookup + ?Sized,
{
    validate_record(record)?;

    let (Some(staff_id), Some(date)) = (record.staff_ref(), record.date) else {
        return Err(RejectReason::MissingStaff);
    };

    let holiday = record.holiday || holidays.is_holiday(date);

    let leave = record
        .leave_type_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            let info = leaves.lookup(id);
            LeaveAnnotation {
                id: id.to_string(),
                title: info.as_ref().map(|i| i.title.clone()),
                color: info.and_then(|i| i.color),
            }
        });

    if record.is_marker_only() {
        let label = if holiday {
            HOLIDAY_TEXT.to_string()
        } else if let Some(l) = &leave {
            l.display_title().to_string()
        } else {
            return Ok(None);
        };

        return Ok(Some(Shift {
            record_id: record.id.clone(),
            staff_id: staff_id.to_string(),
            date,
            start: record.start,
            end: record.end,
            raw_minutes: 0,
            lunch_minutes: 0,
            work_minutes: 0,
            leave,
            holiday,
            marker_only: true,
            label,
        }));
    }

    let raw = between(record.start, record.end);
    let lunch = lunch_minutes(record.lunch.as_ref());
    let work = work_minutes(raw, lunch);

    if holiday {
        debug!(
            record = %record.id,
            %date,
            work_minutes = work,
            "holiday record carries work time"
        );
    }

    Ok(Some(Shift {
        record_id: record.id.clone(),
        staff_id: staff_id.to_string(),
        date,
        start: record.start,
        end: record.end,
        raw_minutes: raw,
        lunch_minutes: lunch,
        work_minutes: work,
        leave,
        holiday,
        marker_only: false,
        label: format_shift_label(record.start, record.end, work),
    }))
}

/// Batch form of [`build_shift`]: malformed and empty records are counted in
/// `diagnostics` instead of failing the batch. Input order is preserved.
pub fn build_shifts<'a, L, H, I>(
    records: I,
    leaves: &L,
    holidays: &H,
    diagnostics: &mut Diagnostics,
) -> Vec<Shift>
where
    L: LeaveColorLookup + ?Sized,
    H: HolidayLookup + ?Sized,
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut shifts = Vec::new();

    for record in records {
        match build_shift(record, leaves, holidays) {
            Ok(Some(shift)) => {
                note_shift(&shift, diagnostics);
                shifts.push(shift);
            }
            Ok(None) => diagnostics.dropped_empty += 1,
            Err(reason) => {
                debug!(record = %record.id, %reason, "skipping record");
                diagnostics.record_rejection(reason, &record.id);
            }
        }
    }

    shifts
}

/// Updates the soft counters for an accepted shift.
pub(crate) fn note_shift(shift: &Shift, diagnostics: &mut Diagnostics) {
    if let Some(leave) = &shift.leave
        && leave.title.is_none()
    {
        diagnostics.record_unmapped_leave(&leave.id);
    }
    if shift.holiday && !shift.marker_only {
        diagnostics.holiday_with_work += 1;
    }
}
