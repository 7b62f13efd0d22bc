mod common;
use common::*;
use rtimegrid::core::calculator::weeks::{WeekStart, calculate_weeks};
use rtimegrid::core::grid::{Grid, GridOptions};
use rtimegrid::core::logic::{Core, MonthSelection};
use rtimegrid::export::matrix::{
    COL_FIRST_DAY, COL_TOTAL, COLUMN_COUNT, export_file_stem, sanitize_file_part,
};
use rtimegrid::export::{CellKind, ExportFormat, ExportLogic, export_file_name, to_export_matrix};
use rtimegrid::models::{Palette, PriorityTier, Rgb};
use rtimegrid::source::sample_dataset;
use std::fs;

fn sample_grid() -> Grid {
    sample_grid_with(Palette::default())
}

fn sample_grid_with(palette: Palette) -> Grid {
    let dataset = sample_dataset();
    let records = dataset.records();
    Core::build_month(
        &records,
        dataset.roster(),
        &MonthSelection::new(d(2024, 3, 1), WeekStart::MONDAY),
        palette,
        GridOptions::default(),
        &dataset.leave_table(),
        &dataset.holiday_calendar(),
    )
    .expect("sample grid")
}

#[test]
fn test_matrix_headers() {
    let matrix = to_export_matrix(&sample_grid().groups, "Ward A");

    assert_eq!(matrix.header_rows[0], vec!["Ward A: 2024-02-26 - 2024-03-31".to_string()]);
    assert_eq!(
        matrix.header_rows[1],
        vec!["Staff", "Employee", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Total"]
    );
}

#[test]
fn test_matrix_rows_and_styles_line_up() {
    let matrix = to_export_matrix(&sample_grid().groups, "Ward A");

    // 5 weeks, each with a sub-header and three staff rows
    assert_eq!(matrix.data_rows.len(), 20);
    assert_eq!(matrix.cell_styles.len(), matrix.data_rows.len());
    for (row, styles) in matrix.data_rows.iter().zip(&matrix.cell_styles) {
        assert_eq!(row.len(), COLUMN_COUNT);
        assert_eq!(styles.len(), COLUMN_COUNT);
    }
}

#[test]
fn test_week_rows_content() {
    let matrix = to_export_matrix(&sample_grid().groups, "Ward A");

    let header = &matrix.data_rows[4];
    assert_eq!(header[0], "Week 2 (03/04 - 03/10)");
    assert_eq!(header[COL_FIRST_DAY], "03/04");
    assert!(matrix.cell_styles[4].iter().all(|s| s.kind == CellKind::WeekHeader && s.bold));

    let anna = &matrix.data_rows[6];
    assert_eq!(anna[0], "Rossi Anna");
    assert_eq!(anna[1], "E-100");
    assert_eq!(anna[COL_FIRST_DAY], "09:00-17:00(7:30)");
    assert_eq!(
        anna[COL_FIRST_DAY + 1],
        "09:00-13:00(4:00)\n14:00-18:30(4:30)\nTotal: 8h 30m"
    );
    assert_eq!(anna[COL_TOTAL], "16h 00m");
    assert_eq!(matrix.cell_styles[6][COL_TOTAL].kind, CellKind::Total);
}

#[test]
fn test_marker_cells_are_plain_text() {
    let matrix = to_export_matrix(&sample_grid().groups, "Ward A");

    let luca = &matrix.data_rows[5];
    assert_eq!(luca[COL_FIRST_DAY], "Annual leave");
    assert_eq!(luca[COL_FIRST_DAY + 1], "Sick leave");
    assert!(!luca[COL_FIRST_DAY].contains("00:00"));

    let style = &matrix.cell_styles[5][COL_FIRST_DAY];
    assert_eq!(style.fill, Some(ANNUAL));
    assert_eq!(style.tier, Some(PriorityTier::LeaveType));

    let anna_holiday = &matrix.data_rows[18];
    assert_eq!(anna_holiday[COL_FIRST_DAY + 4], "Holiday");
}

#[test]
fn test_export_colors_match_grid() {
    let grid = sample_grid_with(Palette {
        holiday: Rgb(0x112233),
        default: Rgb(0xF0F0F0),
    });
    let matrix = to_export_matrix(&grid.groups, "Ward A");

    let mut row = 0;
    for group in &grid.groups {
        row += 1;
        for staff_row in &group.rows {
            for (i, day) in staff_row.days.iter().enumerate() {
                let style = &matrix.cell_styles[row][COL_FIRST_DAY + i];
                assert_eq!(style.fill, Some(day.color.color));
                assert_eq!(style.tier, Some(day.color.tier));
            }
            row += 1;
        }
    }
    assert_eq!(row, matrix.data_rows.len());

    // Rossi Anna, holiday marker on Friday 2024-03-29
    assert_eq!(matrix.cell_styles[18][COL_FIRST_DAY + 4].fill, Some(Rgb(0x112233)));
    assert_eq!(matrix.cell_styles[18][COL_FIRST_DAY + 5].fill, Some(Rgb(0xF0F0F0)));
}

#[test]
fn test_file_name_from_group_and_span() {
    let grid = sample_grid();
    let weeks: Vec<_> = grid.groups.iter().map(|g| g.week.clone()).collect();

    assert_eq!(export_file_name("Ward A", &weeks, "xlsx"), "Ward_A_20240226-20240331.xlsx");
    assert_eq!(export_file_stem("Ward A", &[]), "Ward_A");

    let reordered: Vec<_> = weeks.iter().rev().cloned().collect();
    assert_eq!(export_file_stem("Ward A", &reordered), export_file_stem("Ward A", &weeks));
}

#[test]
fn test_sanitize_file_part() {
    assert_eq!(sanitize_file_part("  ICU / Night-shift  "), "ICU_Night-shift");
    assert_eq!(sanitize_file_part("***"), "timetable");
    assert_eq!(sanitize_file_part(""), "timetable");
}

#[test]
fn test_empty_grid_matrix() {
    let matrix = to_export_matrix(&[], "Ward A");

    assert!(matrix.is_empty());
    assert_eq!(matrix.header_rows[0], vec!["Ward A".to_string()]);
    assert_eq!(matrix.header_rows[1][COL_FIRST_DAY], "Day 1");
    assert_eq!(matrix.file_name("csv"), "Ward_A.csv");
}

#[test]
fn test_single_week_file_span() {
    let weeks = calculate_weeks(d(2024, 3, 1), 2);
    assert_eq!(
        export_file_name("Ward A", &weeks[1..2], "json"),
        "Ward_A_20240304-20240310.json"
    );
}

#[test]
fn test_export_writes_every_format() {
    let dir = temp_dir("export_formats");
    let matrix = to_export_matrix(&sample_grid().groups, "Ward A");

    for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Xlsx] {
        let path = ExportLogic::export(&matrix, format, None, &dir, true).expect("export");
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(matrix.file_name(format.as_str()).as_str())
        );
        assert!(fs::metadata(&path).expect("written").len() > 0);
    }

    let csv = fs::read_to_string(dir.join("Ward_A_20240226-20240331.csv")).unwrap();
    assert!(csv.starts_with("Ward A: 2024-02-26 - 2024-03-31"));
    assert!(csv.contains("Rossi Anna,E-100,09:00-17:00(7:30)"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("Ward_A_20240226-20240331.json")).unwrap())
            .unwrap();
    assert_eq!(json["file_stem"], "Ward_A_20240226-20240331");
    assert_eq!(json["cell_styles"][5][2]["fill"], "#C6EFCE");
    assert_eq!(json["cell_styles"][5][2]["tier"], "LEAVE_TYPE");
}

#[test]
fn test_export_to_explicit_file_creates_parent() {
    let dir = temp_dir("export_explicit");
    let target = dir.join("nested").join("out.csv");
    let matrix = to_export_matrix(&[], "Ward A");

    let path = ExportLogic::export(&matrix, ExportFormat::Csv, Some(target.as_path()), &dir, false).unwrap();

    assert_eq!(path, target);
    assert!(target.exists());
}
