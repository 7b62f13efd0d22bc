//! Day aggregation: shifts of one (staff, date) pair into a DayCell.

use crate::core::calculator::interval::format_total;
use crate::core::calculator::weeks::weekday_number;
use crate::core::priority::resolve_day;
use crate::core::shift_builder::HOLIDAY_TEXT;
use crate::models::color::Palette;
use crate::models::day_cell::DayCell;
use crate::models::shift::Shift;
use chrono::NaiveDate;

/// Puts work shifts first ordered by start time, markers after them.
/// Stable, so equal keys keep input order.
pub fn order_shifts(shifts: &mut [Shift]) {
    shifts.sort_by_key(Shift::order_key);
}

pub fn aggregate_day(
    date: NaiveDate,
    day_number: u8,
    mut shifts: Vec<Shift>,
    calendar_holiday: bool,
    palette: &Palette,
) -> DayCell {
    order_shifts(&mut shifts);

    let total_minutes = shifts.iter().map(|s| s.work_minutes).sum();
    let has_holiday = calendar_holiday || shifts.iter().any(|s| s.holiday);
    let has_leave = shifts.iter().any(Shift::has_leave);
    let has_data = !shifts.is_empty() || calendar_holiday;
    let color = resolve_day(&shifts, calendar_holiday, palette);
    let text = day_text(&shifts, has_holiday, total_minutes);

    DayCell {
        date,
        day_number,
        weekday: weekday_number(date),
        shifts,
        total_minutes,
        has_data,
        has_holiday,
        has_leave,
        calendar_holiday,
        color,
        text,
    }
}

/// Cell text for ordered shifts.
///
/// - no work shift: `Holiday`, else the leave title(s), else empty;
/// - a single shift: its label;
/// - several shifts: one label per line and a `Total: Hh MMm` trailer.
pub fn day_text(shifts: &[Shift], has_holiday: bool, total_minutes: i64) -> String {
    if shifts.iter().all(|s| s.marker_only) {
        if has_holiday {
            return HOLIDAY_TEXT.to_string();
        }
        let mut titles: Vec<&str> = Vec::new();
        for leave in shifts.iter().filter_map(|s| s.leave.as_ref()) {
            let t = leave.display_title();
            if !titles.contains(&t) {
                titles.push(t);
            }
        }
        return titles.join(", ");
    }

    if let [only] = shifts {
        return only.label.clone();
    }

    let mut lines: Vec<String> = shifts.iter().map(|s| s.label.clone()).collect();
    lines.push(format!("Total: {}", format_total(total_minutes)));
    lines.join("\n")
}
