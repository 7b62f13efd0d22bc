//! Injected lookups used while building shifts.
//!
//! Both are plain traits with blanket impls for closures, so callers can pass
//! `|id: &str| ...` / `|d: NaiveDate| ...` or the table types below.

use crate::models::color::Rgb;
use crate::models::leave::{LeaveInfo, LeaveType};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use tracing::warn;

pub trait LeaveColorLookup {
    /// `None` for an id the source does not know about. Not an error.
    fn lookup(&self, leave_type_id: &str) -> Option<LeaveInfo>;
}

pub trait HolidayLookup {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> LeaveColorLookup for F
where
    F: Fn(&str) -> Option<LeaveInfo>,
{
    fn lookup(&self, leave_type_id: &str) -> Option<LeaveInfo> {
        self(leave_type_id)
    }
}

impl<F> HolidayLookup for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Leave types indexed by id.
#[derive(Debug, Clone, Default)]
pub struct LeaveTable {
    entries: HashMap<String, LeaveInfo>,
}

impl LeaveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from source leave types. A color that does not parse
    /// is logged and left unresolved.
    pub fn from_types(types: &[LeaveType]) -> Self {
        let mut table = Self::new();
        for t in types {
            let color = t.color.as_deref().and_then(|c| match c.parse::<Rgb>() {
                Ok(rgb) => Some(rgb),
                Err(e) => {
                    warn!(leave_type = %t.id, error = %e, "ignoring leave color");
                    None
                }
            });
            table.insert(&t.id, &t.title, color);
        }
        table
    }

    pub fn insert(&mut self, id: &str, title: &str, color: Option<Rgb>) {
        self.entries.insert(
            id.to_string(),
            LeaveInfo {
                title: title.to_string(),
                color,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LeaveColorLookup for LeaveTable {
    fn lookup(&self, leave_type_id: &str) -> Option<LeaveInfo> {
        self.entries.get(leave_type_id).cloned()
    }
}

/// A set of holiday dates.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl HolidayLookup for HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Lookup that never matches, for callers without leave or holiday data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl LeaveColorLookup for NoLookup {
    fn lookup(&self, _leave_type_id: &str) -> Option<LeaveInfo> {
        None
    }
}

impl HolidayLookup for NoLookup {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}
