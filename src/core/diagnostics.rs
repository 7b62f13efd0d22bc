//! Counts and reasons for records the grid could not use as-is.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Why a record was excluded from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    MissingStaff,
    InvalidDate,
    StartOutOfRange,
    EndOutOfRange,
    LunchOutOfRange,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingStaff => "missing staff reference",
            RejectReason::InvalidDate => "missing or invalid date",
            RejectReason::StartOutOfRange => "start time out of range",
            RejectReason::EndOutOfRange => "end time out of range",
            RejectReason::LunchOutOfRange => "lunch time out of range",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary report produced alongside the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub total_records: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<RejectReason, usize>,
    /// Record ids per rejection reason, in input order.
    pub rejected_ids: BTreeMap<RejectReason, Vec<String>>,
    /// Zero-time records with neither holiday nor leave.
    pub dropped_empty: usize,
    /// Marker-only shifts left out because marker days were disabled.
    pub markers_hidden: usize,
    /// Valid records whose staff reference matches nobody in the roster.
    pub unknown_staff: usize,
    /// Valid records dated outside every requested week.
    pub out_of_range: usize,
    /// Holiday flag together with real work time; kept, but worth a look.
    pub holiday_with_work: usize,
    /// Leave type ids the lookup did not know.
    pub unmapped_leave_ids: Vec<String>,
}

impl Diagnostics {
    pub fn record_rejection(&mut self, reason: RejectReason, record_id: &str) {
        *self.rejected.entry(reason).or_default() += 1;
        self.rejected_ids
            .entry(reason)
            .or_default()
            .push(record_id.to_string());
    }

    pub fn record_unmapped_leave(&mut self, leave_id: &str) {
        if !self.unmapped_leave_ids.iter().any(|id| id == leave_id) {
            self.unmapped_leave_ids.push(leave_id.to_string());
        }
    }

    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected_total() == 0
            && self.unknown_staff == 0
            && self.unmapped_leave_ids.is_empty()
    }

    /// Share of input records that made it into the grid, 0..=100.
    pub fn quality_score(&self) -> u8 {
        if self.total_records == 0 {
            return 100;
        }
        let usable = self.accepted.saturating_sub(self.unknown_staff);
        ((usable * 100) / self.total_records).min(100) as u8
    }

    /// Human-readable lines, one per non-zero counter.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} records, {} accepted, {} rejected",
            self.total_records,
            self.accepted,
            self.rejected_total()
        )];

        for (reason, count) in &self.rejected {
            lines.push(format!("  {count} x {reason}"));
        }
        if self.dropped_empty > 0 {
            lines.push(format!("{} empty records dropped", self.dropped_empty));
        }
        if self.markers_hidden > 0 {
            lines.push(format!("{} marker-only records hidden", self.markers_hidden));
        }
        if self.unknown_staff > 0 {
            lines.push(format!("{} records for unknown staff", self.unknown_staff));
        }
        if self.out_of_range > 0 {
            lines.push(format!("{} records outside the selected weeks", self.out_of_range));
        }
        if self.holiday_with_work > 0 {
            lines.push(format!(
                "{} holiday records with work time",
                self.holiday_with_work
            ));
        }
        if !self.unmapped_leave_ids.is_empty() {
            lines.push(format!(
                "unmapped leave types: {}",
                self.unmapped_leave_ids.join(", ")
            ));
        }
        lines
    }
}
