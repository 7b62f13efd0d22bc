mod common;
use common::*;
use rtimegrid::core::day::aggregate_day;
use rtimegrid::core::lookup::NoLookup;
use rtimegrid::core::priority::{dominant_leave_color, resolve_day, resolve_day_color};
use rtimegrid::core::shift_builder::build_shift;
use rtimegrid::models::{AttendanceRecord, Palette, PriorityTier, Rgb, Shift};

fn shifts(records: &[AttendanceRecord]) -> Vec<Shift> {
    let leaves = leave_table();
    records
        .iter()
        .filter_map(|r| build_shift(r, &leaves, &NoLookup).expect("valid record"))
        .collect()
}

#[test]
fn test_single_shift_day() {
    let day = d(2024, 3, 4);
    let cell = aggregate_day(
        day,
        1,
        shifts(&[work_with_lunch("r1", "s1", day, (9, 0), (17, 0), 30)]),
        false,
        &Palette::default(),
    );

    assert_eq!(cell.total_minutes, 450);
    assert_eq!(cell.text, "09:00-17:00(7:30)");
    assert!(cell.has_data);
    assert_eq!(cell.color.tier, PriorityTier::Default);
    assert_eq!(cell.color.color, Rgb::WHITE);
    // 2024-03-04 is a Monday
    assert_eq!(cell.weekday, 2);
}

#[test]
fn test_split_shift_is_sorted_and_totalled() {
    let day = d(2024, 3, 5);
    let cell = aggregate_day(
        day,
        2,
        shifts(&[
            work("late", "s1", day, (14, 0), (18, 30)),
            work("early", "s1", day, (9, 0), (13, 0)),
        ]),
        false,
        &Palette::default(),
    );

    assert_eq!(cell.total_minutes, 510);
    assert_eq!(
        cell.text,
        "09:00-13:00(4:00)\n14:00-18:30(4:30)\nTotal: 8h 30m"
    );
    assert_eq!(cell.shifts[0].record_id, "early");
}

#[test]
fn test_marker_only_day_text() {
    let day = d(2024, 3, 4);
    let leave_day = aggregate_day(
        day,
        1,
        shifts(&[leave_marker("r1", "s1", day, "AL")]),
        false,
        &Palette::default(),
    );
    assert_eq!(leave_day.text, "Annual leave");
    assert_eq!(leave_day.total_minutes, 0);
    assert!(leave_day.is_marker_only());
    assert_eq!(leave_day.color.tier, PriorityTier::LeaveType);
    assert_eq!(leave_day.color.color, ANNUAL);

    let holiday_day = aggregate_day(
        day,
        1,
        shifts(&[holiday_marker("r2", "s1", day), leave_marker("r3", "s1", day, "SL")]),
        false,
        &Palette::default(),
    );
    assert_eq!(holiday_day.text, "Holiday");
    assert_eq!(holiday_day.leave_titles(), vec!["Sick leave"]);
}

#[test]
fn test_markers_listed_after_work() {
    let day = d(2024, 3, 4);
    let cell = aggregate_day(
        day,
        1,
        shifts(&[
            leave_marker("r1", "s1", day, "AL"),
            work("r2", "s1", day, (9, 0), (12, 0)),
        ]),
        false,
        &Palette::default(),
    );

    assert_eq!(cell.shifts[0].record_id, "r2");
    assert_eq!(cell.text, "09:00-12:00(3:00)\nAnnual leave\nTotal: 3h 00m");
    assert!(!cell.is_marker_only());
    assert_eq!(cell.color.color, ANNUAL);
}

#[test]
fn test_empty_day() {
    let cell = aggregate_day(d(2024, 3, 4), 1, Vec::new(), false, &Palette::default());

    assert!(!cell.has_data);
    assert_eq!(cell.text, "");
    assert_eq!(cell.total_minutes, 0);
    assert_eq!(cell.color.tier, PriorityTier::Default);
}

#[test]
fn test_calendar_holiday_on_empty_day() {
    let cell = aggregate_day(d(2024, 3, 29), 5, Vec::new(), true, &Palette::default());

    assert!(cell.has_data);
    assert!(cell.has_holiday);
    assert_eq!(cell.text, "Holiday");
    assert_eq!(cell.color.tier, PriorityTier::Holiday);
    assert_eq!(cell.color.reasons, vec!["holiday: calendar".to_string()]);
}

#[test]
fn test_holiday_beats_leave_color() {
    let day = d(2024, 3, 4);
    let palette = Palette {
        holiday: Rgb(0xFF0000),
        default: Rgb(0xEEEEEE),
    };
    let resolution = resolve_day_color(
        &shifts(&[
            leave_marker("r1", "s1", day, "AL"),
            leave_marker("r2", "s1", day, "AL"),
            holiday_marker("r3", "s1", day),
        ]),
        &palette,
    );

    assert_eq!(resolution.tier, PriorityTier::Holiday);
    assert_eq!(resolution.color, Rgb(0xFF0000));
    assert_eq!(
        resolution.reasons,
        vec!["holiday: record r3 on 2024-03-04".to_string()]
    );
}

#[test]
fn test_most_frequent_leave_color_wins() {
    let day = d(2024, 3, 4);
    let list = shifts(&[
        leave_marker("r1", "s1", day, "AL"),
        leave_marker("r2", "s1", day, "SL"),
        leave_marker("r3", "s1", day, "SL"),
    ]);

    assert_eq!(dominant_leave_color(&list), Some((SICK, 2)));
    let resolution = resolve_day(&list, false, &Palette::default());
    assert_eq!(resolution.color, SICK);
    assert_eq!(resolution.reasons, vec!["leave color #FFEB9C on 2 of 3 shifts".to_string()]);
}

#[test]
fn test_leave_color_tie_goes_to_first_seen() {
    let day = d(2024, 3, 4);
    let list = shifts(&[
        leave_marker("r1", "s1", day, "SL"),
        leave_marker("r2", "s1", day, "AL"),
    ]);

    assert_eq!(dominant_leave_color(&list), Some((SICK, 1)));
}

#[test]
fn test_leave_without_color_falls_back_to_default() {
    let day = d(2024, 3, 4);
    let list = shifts(&[
        leave_marker("r1", "s1", day, "TR"),
        leave_marker("r2", "s1", day, "XX"),
    ]);

    let resolution = resolve_day(&list, false, &Palette::default());

    assert_eq!(resolution.tier, PriorityTier::Default);
    assert_eq!(resolution.color, Rgb::WHITE);
}

#[test]
fn test_resolution_is_deterministic() {
    let day = d(2024, 3, 4);
    let cell = aggregate_day(
        day,
        1,
        shifts(&[
            leave_marker("r1", "s1", day, "AL"),
            work("r2", "s1", day, (9, 0), (12, 0)).with_leave("SL"),
        ]),
        false,
        &Palette::default(),
    );

    assert_eq!(cell.resolve_color(&Palette::default()), cell.color);
}

#[test]
fn test_leave_tie_uses_day_order_not_input_order() {
    let day = d(2024, 3, 4);
    // the marker comes first in the input, the work shift first in the day
    let input = shifts(&[
        leave_marker("r1", "s1", day, "AL"),
        work("r2", "s1", day, (9, 0), (12, 0)).with_leave("SL"),
    ]);
    let mut reversed = input.clone();
    reversed.reverse();

    let raw = resolve_day_color(&input, &Palette::default());
    let cell = aggregate_day(day, 1, input.clone(), false, &Palette::default());

    assert_eq!(raw.color, SICK);
    assert_eq!(raw, cell.color);
    assert_eq!(resolve_day_color(&reversed, &Palette::default()), raw);
    assert_eq!(dominant_leave_color(&input), Some((SICK, 1)));
}
