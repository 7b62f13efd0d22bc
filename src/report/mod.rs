//! Optional reporting over a finished grid. Reads `WeekGroup`s only.

pub mod stats;

pub use stats::{GridStats, StaffTotals, compute_stats};
