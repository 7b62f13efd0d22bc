use crate::core::diagnostics::Diagnostics;
use crate::models::color::PriorityTier;
use crate::models::week::WeekGroup;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaffTotals {
    pub staff_id: String,
    pub name: String,
    pub total_minutes: i64,
    pub days_worked: usize,
    pub holiday_days: usize,
    pub leave_days: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridStats {
    pub weeks: usize,
    pub total_minutes: i64,
    pub days_with_data: usize,
    pub holiday_days: usize,
    pub leave_days: usize,
    /// Days per leave title (unresolved leave ids appear under their id).
    pub leave_breakdown: BTreeMap<String, usize>,
    pub cells_per_tier: BTreeMap<PriorityTier, usize>,
    /// Staff in roster order of first appearance.
    pub staff: Vec<StaffTotals>,
    pub quality_score: Option<u8>,
}

/// Aggregates the grid. Pass the build diagnostics to get a quality score.
pub fn compute_stats(groups: &[WeekGroup], diagnostics: Option<&Diagnostics>) -> GridStats {
    let mut stats = GridStats {
        weeks: groups.len(),
        quality_score: diagnostics.map(Diagnostics::quality_score),
        ..GridStats::default()
    };
    let mut staff_pos: BTreeMap<String, usize> = BTreeMap::new();

    for row in groups.iter().flat_map(|g| g.rows.iter()) {
        let pos = *staff_pos.entry(row.staff.id.clone()).or_insert_with(|| {
            stats.staff.push(StaffTotals {
                staff_id: row.staff.id.clone(),
                name: row.staff.name.clone(),
                ..StaffTotals::default()
            });
            stats.staff.len() - 1
        });

        for day in row.days.iter() {
            *stats.cells_per_tier.entry(day.color.tier).or_default() += 1;

            if !day.has_data {
                continue;
            }

            let totals = &mut stats.staff[pos];
            totals.total_minutes += day.total_minutes;
            if day.total_minutes > 0 {
                totals.days_worked += 1;
            }
            if day.has_holiday {
                totals.holiday_days += 1;
                stats.holiday_days += 1;
            }
            if day.has_leave {
                totals.leave_days += 1;
                stats.leave_days += 1;
                for title in day.leave_titles() {
                    *stats.leave_breakdown.entry(title.to_string()).or_default() += 1;
                }
            }

            stats.days_with_data += 1;
            stats.total_minutes += day.total_minutes;
        }
    }

    stats
}
