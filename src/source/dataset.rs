use crate::core::lookup::{HolidayCalendar, LeaveTable};
use crate::errors::{AppError, AppResult};
use crate::models::clock::{ClockTime, LunchBreak};
use crate::models::leave::LeaveType;
use crate::models::record::AttendanceRecord;
use crate::models::staff::StaffMember;
use crate::utils::date::parse_date_only;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub group: Option<String>,
    /// `None` when the document has no `staff` key at all.
    #[serde(default)]
    pub staff: Option<Vec<StaffMember>>,
    #[serde(default)]
    pub leave_types: Vec<LeaveType>,
    #[serde(default)]
    pub holidays: Vec<String>,
    #[serde(default)]
    pub records: Vec<RawRecord>,
}

/// A record as stored in the dataset file: date as text, times as integers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub staff_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_hour: i32,
    #[serde(default)]
    pub start_minute: i32,
    #[serde(default)]
    pub end_hour: i32,
    #[serde(default)]
    pub end_minute: i32,
    #[serde(default)]
    pub lunch_minutes: Option<i32>,
    #[serde(default)]
    pub lunch_start_hour: Option<i32>,
    #[serde(default)]
    pub lunch_start_minute: Option<i32>,
    #[serde(default)]
    pub lunch_end_hour: Option<i32>,
    #[serde(default)]
    pub lunch_end_minute: Option<i32>,
    #[serde(default)]
    pub leave_type_id: Option<String>,
    #[serde(default)]
    pub holiday: bool,
}

impl RawRecord {
    /// Canonical record. An unreadable date becomes `None` and is rejected
    /// later by the shift builder; timestamps keep only their date part.
    pub fn to_record(&self, position: usize) -> AttendanceRecord {
        let id = self
            .id
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("#{}", position + 1));

        let date = self.date.as_deref().and_then(parse_date_only);
        if date.is_none() {
            debug!(record = %id, date = ?self.date, "unreadable record date");
        }

        AttendanceRecord {
            id,
            staff_id: self.staff_id.clone(),
            date,
            start: ClockTime::new(self.start_hour, self.start_minute),
            end: ClockTime::new(self.end_hour, self.end_minute),
            lunch: self.lunch(),
            leave_type_id: self.leave_type_id.clone(),
            holiday: self.holiday,
        }
    }

    fn lunch(&self) -> Option<LunchBreak> {
        let start = self
            .lunch_start_hour
            .map(|h| ClockTime::new(h, self.lunch_start_minute.unwrap_or(0)));
        let end = self
            .lunch_end_hour
            .map(|h| ClockTime::new(h, self.lunch_end_minute.unwrap_or(0)));

        if self.lunch_minutes.is_none() && start.is_none() && end.is_none() {
            return None;
        }

        Some(LunchBreak {
            minutes: self.lunch_minutes,
            start,
            end,
        })
    }
}

impl Dataset {
    /// Reads a dataset; the extension picks the parser (`.json`, `.yaml`, `.yml`).
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let dataset: Dataset = match ext.as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            other => {
                return Err(AppError::Dataset(format!(
                    "unsupported dataset extension: {}",
                    other.unwrap_or("<none>")
                )));
            }
        };

        debug!(
            path = %path.display(),
            records = dataset.records.len(),
            staff = dataset.staff.as_ref().map(Vec::len),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| r.to_record(i))
            .collect()
    }

    pub fn roster(&self) -> Option<&[StaffMember]> {
        self.staff.as_deref()
    }

    pub fn leave_table(&self) -> LeaveTable {
        LeaveTable::from_types(&self.leave_types)
    }

    /// Holiday dates; unreadable entries are logged and skipped.
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        self.holidays
            .iter()
            .filter_map(|s| {
                let d = parse_date_only(s);
                if d.is_none() {
                    warn!(holiday = %s, "ignoring unreadable holiday date");
                }
                d
            })
            .collect()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.trim().is_empty())
    }
}
