//! One display color per day.
//!
//! Tiers, first match wins:
//! 1. HOLIDAY: any holiday shift (or a calendar holiday) gives the holiday color.
//! 2. LEAVE_TYPE: the leave color carried by the most shifts; ties go to the
//!    color met first.
//! 3. DEFAULT: the palette background.
//!
//! Shifts are taken in day display order ([`Shift::order_key`]), the same
//! order the aggregated cell uses.

use crate::models::color::{ColorResolution, Palette, PriorityTier, Rgb};
use crate::models::shift::Shift;

pub fn resolve_day_color(shifts: &[Shift], palette: &Palette) -> ColorResolution {
    resolve_day(shifts, false, palette)
}

pub fn resolve_day(shifts: &[Shift], calendar_holiday: bool, palette: &Palette) -> ColorResolution {
    let ordered = in_day_order(shifts);

    let holiday_reasons: Vec<String> = ordered
        .iter()
        .filter(|s| s.holiday)
        .map(|s| format!("holiday: record {} on {}", s.record_id, s.date))
        .chain(calendar_holiday.then(|| "holiday: calendar".to_string()))
        .collect();

    if !holiday_reasons.is_empty() {
        return ColorResolution {
            color: palette.holiday,
            tier: PriorityTier::Holiday,
            reasons: holiday_reasons,
        };
    }

    if let Some((color, count)) = dominant_leave(&ordered) {
        return ColorResolution {
            color,
            tier: PriorityTier::LeaveType,
            reasons: vec![format!(
                "leave color {color} on {count} of {} shifts",
                shifts.len()
            )],
        };
    }

    ColorResolution {
        color: palette.default,
        tier: PriorityTier::Default,
        reasons: vec!["no holiday or leave color".to_string()],
    }
}

/// Most frequent leave color with its count; the first in day display order
/// wins ties.
pub fn dominant_leave_color(shifts: &[Shift]) -> Option<(Rgb, usize)> {
    dominant_leave(&in_day_order(shifts))
}

/// Stable, so shifts with equal keys keep input order.
fn in_day_order(shifts: &[Shift]) -> Vec<&Shift> {
    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    ordered.sort_by_key(|s| s.order_key());
    ordered
}

fn dominant_leave(ordered: &[&Shift]) -> Option<(Rgb, usize)> {
    let mut counts: Vec<(Rgb, usize)> = Vec::new();

    for color in ordered.iter().filter_map(|s| s.leave_color()) {
        match counts.iter_mut().find(|(c, _)| *c == color) {
            Some((_, n)) => *n += 1,
            None => counts.push((color, 1)),
        }
    }

    // replace only on a strictly higher count
    counts
        .into_iter()
        .fold(None, |best: Option<(Rgb, usize)>, (c, n)| match best {
            Some((_, bn)) if bn >= n => best,
            _ => Some((c, n)),
        })
}
