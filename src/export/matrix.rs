// src/export/matrix.rs

//! Grid → plain matrix plus per-cell style, ready for any spreadsheet writer.
//!
//! Layout:
//! - header rows: a title row, then `Staff | Employee | 7 weekdays | Total`;
//! - per week: one sub-header row (week label + the seven dates), then one row
//!   per staff member.

use crate::core::calculator::interval::format_total;
use crate::models::color::{PriorityTier, Rgb};
use crate::models::day_cell::DayCell;
use crate::models::week::{DAYS_PER_WEEK, StaffWeekRow, WeekGroup, WeekInfo};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Column positions.
pub const COL_STAFF: usize = 0;
pub const COL_EMPLOYEE: usize = 1;
pub const COL_FIRST_DAY: usize = 2;
pub const COL_TOTAL: usize = COL_FIRST_DAY + DAYS_PER_WEEK;
pub const COLUMN_COUNT: usize = COL_TOTAL + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Title,
    Header,
    WeekHeader,
    Staff,
    Day,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    pub kind: CellKind,
    pub fill: Option<Rgb>,
    pub tier: Option<PriorityTier>,
    pub bold: bool,
    pub wrap: bool,
}

impl CellStyle {
    fn plain(kind: CellKind) -> Self {
        Self {
            kind,
            fill: None,
            tier: None,
            bold: false,
            wrap: false,
        }
    }

    fn bold(kind: CellKind) -> Self {
        Self {
            bold: true,
            ..Self::plain(kind)
        }
    }

    fn day(color: Rgb, tier: PriorityTier) -> Self {
        Self {
            kind: CellKind::Day,
            fill: Some(color),
            tier: Some(tier),
            bold: false,
            wrap: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportMatrix {
    /// File name without extension.
    pub file_stem: String,
    pub header_rows: Vec<Vec<String>>,
    pub data_rows: Vec<Vec<String>>,
    /// Same shape as `data_rows`.
    pub cell_styles: Vec<Vec<CellStyle>>,
}

impl ExportMatrix {
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem, extension)
    }

    pub fn is_empty(&self) -> bool {
        self.data_rows.is_empty()
    }

    /// Header rows followed by data rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.header_rows.iter().chain(self.data_rows.iter())
    }
}

/// Day fills come from each cell's stored color decision, so the export
/// always shows what the grid resolved.
pub fn to_export_matrix(groups: &[WeekGroup], group_name: &str) -> ExportMatrix {
    let weeks: Vec<WeekInfo> = groups.iter().map(|g| g.week.clone()).collect();

    let mut matrix = ExportMatrix {
        file_stem: export_file_stem(group_name, &weeks),
        header_rows: vec![
            vec![title(group_name, &weeks)],
            column_headers(weeks.first().map(|w| w.week_start)),
        ],
        data_rows: Vec::new(),
        cell_styles: Vec::new(),
    };

    for group in groups {
        let (row, style) = week_header_row(&group.week);
        matrix.data_rows.push(row);
        matrix.cell_styles.push(style);

        for staff_row in &group.rows {
            let (row, style) = staff_row_cells(staff_row);
            matrix.data_rows.push(row);
            matrix.cell_styles.push(style);
        }
    }

    matrix
}

/// Text of one day cell. Marker-only days never show a time range.
pub fn export_cell_text(cell: &DayCell) -> String {
    cell.text.clone()
}

fn title(group_name: &str, weeks: &[WeekInfo]) -> String {
    match date_span(weeks) {
        Some((start, end)) => format!(
            "{}: {} - {}",
            group_name.trim(),
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ),
        None => group_name.trim().to_string(),
    }
}

fn column_headers(first_day: Option<NaiveDate>) -> Vec<String> {
    let mut headers = vec!["Staff".to_string(), "Employee".to_string()];
    for i in 0..DAYS_PER_WEEK {
        headers.push(match first_day {
            Some(d) => (d + Duration::days(i as i64)).weekday().to_string(),
            None => format!("Day {}", i + 1),
        });
    }
    headers.push("Total".to_string());
    headers
}

fn week_header_row(week: &WeekInfo) -> (Vec<String>, Vec<CellStyle>) {
    let mut row = vec![week.label.clone(), String::new()];
    row.extend(week.dates().map(|d| d.format("%m/%d").to_string()));
    row.push(String::new());

    let style = vec![CellStyle::bold(CellKind::WeekHeader); COLUMN_COUNT];
    (row, style)
}

fn staff_row_cells(row: &StaffWeekRow) -> (Vec<String>, Vec<CellStyle>) {
    let mut cells = Vec::with_capacity(COLUMN_COUNT);
    let mut styles = Vec::with_capacity(COLUMN_COUNT);

    cells.push(row.staff.name.clone());
    styles.push(CellStyle::plain(CellKind::Staff));

    cells.push(row.staff.employee_reference.clone().unwrap_or_default());
    styles.push(CellStyle::plain(CellKind::Staff));

    for day in &row.days {
        cells.push(export_cell_text(day));
        styles.push(CellStyle::day(day.color.color, day.color.tier));
    }

    cells.push(format_total(row.weekly_total_minutes));
    styles.push(CellStyle::bold(CellKind::Total));

    (cells, styles)
}

/// Earliest week start and latest week end.
pub fn date_span(weeks: &[WeekInfo]) -> Option<(NaiveDate, NaiveDate)> {
    let start = weeks.iter().map(|w| w.week_start).min()?;
    let end = weeks.iter().map(|w| w.week_end).max()?;
    Some((start, end))
}

/// `{group}_{YYYYMMDD}-{YYYYMMDD}`, or just `{group}` with no weeks.
pub fn export_file_stem(group_name: &str, weeks: &[WeekInfo]) -> String {
    let name = sanitize_file_part(group_name);
    match date_span(weeks) {
        Some((start, end)) => format!("{}_{}-{}", name, start.format("%Y%m%d"), end.format("%Y%m%d")),
        None => name,
    }
}

pub fn export_file_name(group_name: &str, weeks: &[WeekInfo], extension: &str) -> String {
    format!("{}.{}", export_file_stem(group_name, weeks), extension)
}

/// Keeps letters, digits and `-`; every other run of characters becomes `_`.
/// An empty result falls back to `timetable`.
pub fn sanitize_file_part(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.trim().chars() {
        if c.is_alphanumeric() || c == '-' {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "timetable".to_string()
    } else {
        trimmed.to_string()
    }
}
