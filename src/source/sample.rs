//! A small demo dataset for `rtimegrid init --sample`.

use super::dataset::{Dataset, RawRecord};
use crate::models::leave::LeaveType;
use crate::models::staff::StaffMember;

fn work(id: &str, staff: &str, date: &str, start: (i32, i32), end: (i32, i32), lunch: i32) -> RawRecord {
    RawRecord {
        id: Some(id.to_string()),
        staff_id: Some(staff.to_string()),
        date: Some(date.to_string()),
        start_hour: start.0,
        start_minute: start.1,
        end_hour: end.0,
        end_minute: end.1,
        lunch_minutes: (lunch > 0).then_some(lunch),
        ..RawRecord::default()
    }
}

fn marker(id: &str, staff: &str, date: &str, holiday: bool, leave: Option<&str>) -> RawRecord {
    RawRecord {
        id: Some(id.to_string()),
        staff_id: Some(staff.to_string()),
        date: Some(date.to_string()),
        leave_type_id: leave.map(str::to_string),
        holiday,
        ..RawRecord::default()
    }
}

/// March 2024 for a three-person team.
pub fn sample_dataset() -> Dataset {
    Dataset {
        group: Some("Ward A".to_string()),
        staff: Some(vec![
            StaffMember::new("s1", "Rossi Anna").with_employee_reference("E-100"),
            StaffMember::new("s2", "Bianchi Luca").with_employee_reference("E-101"),
            StaffMember::new("s3", "Night cover").template(),
        ]),
        leave_types: vec![
            LeaveType {
                id: "AL".to_string(),
                title: "Annual leave".to_string(),
                color: Some("#C6EFCE".to_string()),
            },
            LeaveType {
                id: "SL".to_string(),
                title: "Sick leave".to_string(),
                color: Some("#FFEB9C".to_string()),
            },
        ],
        holidays: vec!["2024-03-29".to_string()],
        records: vec![
            work("r1", "s1", "2024-03-04", (9, 0), (17, 0), 30),
            work("r2", "s1", "2024-03-05", (9, 0), (13, 0), 0),
            work("r3", "s1", "2024-03-05", (14, 0), (18, 30), 0),
            marker("r4", "E-101", "2024-03-04", false, Some("AL")),
            marker("r5", "s2", "2024-03-05", false, Some("SL")),
            work("r6", "s3", "2024-03-06", (22, 0), (6, 0), 0),
            marker("r7", "s1", "2024-03-29", true, None),
            work("r8", "s2", "2024-03-29", (8, 0), (12, 0), 0),
        ],
    }
}
