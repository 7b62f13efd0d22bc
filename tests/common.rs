#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimegrid::core::lookup::LeaveTable;
use rtimegrid::models::{AttendanceRecord, ClockTime, LunchBreak, Rgb, StaffMember};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ANNUAL: Rgb = Rgb(0xC6EFCE);
pub const SICK: Rgb = Rgb(0xFFEB9C);

pub fn rtg() -> Command {
    cargo_bin_cmd!("rtimegrid")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

pub fn t(h: i32, m: i32) -> ClockTime {
    ClockTime::new(h, m)
}

/// Work record `id` for `staff` on `date` from `start` to `end`.
pub fn work(id: &str, staff: &str, date: NaiveDate, start: (i32, i32), end: (i32, i32)) -> AttendanceRecord {
    AttendanceRecord::work(id, staff, date, t(start.0, start.1), t(end.0, end.1))
}

pub fn work_with_lunch(
    id: &str,
    staff: &str,
    date: NaiveDate,
    start: (i32, i32),
    end: (i32, i32),
    lunch: i32,
) -> AttendanceRecord {
    work(id, staff, date, start, end).with_lunch(LunchBreak::minutes(lunch))
}

pub fn holiday_marker(id: &str, staff: &str, date: NaiveDate) -> AttendanceRecord {
    AttendanceRecord::marker(id, staff, date, true, None)
}

pub fn leave_marker(id: &str, staff: &str, date: NaiveDate, leave: &str) -> AttendanceRecord {
    AttendanceRecord::marker(id, staff, date, false, Some(leave.to_string()))
}

/// AL and SL with colors, TR without one.
pub fn leave_table() -> LeaveTable {
    let mut table = LeaveTable::new();
    table.insert("AL", "Annual leave", Some(ANNUAL));
    table.insert("SL", "Sick leave", Some(SICK));
    table.insert("TR", "Training", None);
    table
}

pub fn roster() -> Vec<StaffMember> {
    vec![
        StaffMember::new("s1", "Rossi Anna").with_employee_reference("E-100"),
        StaffMember::new("s2", "Bianchi Luca").with_employee_reference("E-101"),
    ]
}

/// Unique path inside the temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("rtimegrid_{name}.{ext}"));
    fs::remove_file(&path).ok();
    path
}

/// Fresh empty directory inside the temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("rtimegrid_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}
