mod common;
use chrono::{Datelike, NaiveDate, Weekday};
use common::d;
use rtimegrid::core::calculator::weeks::{
    WeekStart, calculate_weeks, month_bounds, select_week, weekday_from_number, weeks_for_range,
};

#[test]
fn test_march_2024_monday_start() {
    let weeks = calculate_weeks(d(2024, 3, 15), 2);

    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0].week_start, d(2024, 2, 26));
    assert_eq!(weeks[0].week_end, d(2024, 3, 3));
    assert_eq!(weeks[4].week_end, d(2024, 3, 31));
    assert_eq!(weeks[0].label, "Week 1 (02/26 - 03/03)");
    assert_eq!(
        weeks.iter().map(|w| w.week_num).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn test_march_2024_sunday_start_needs_six_weeks() {
    let weeks = calculate_weeks(d(2024, 3, 1), 1);

    assert_eq!(weeks.len(), 6);
    assert_eq!(weeks[0].week_start, d(2024, 2, 25));
    assert_eq!(weeks[5].week_start, d(2024, 3, 31));
    assert_eq!(weeks[5].week_end, d(2024, 4, 6));
}

#[test]
fn test_february_fitting_exactly_four_weeks() {
    // 2015-02-01 is a Sunday and February 2015 has 28 days.
    let weeks = calculate_weeks(d(2015, 2, 10), 1);

    assert_eq!(weeks.len(), 4);
    assert_eq!(weeks[0].week_start, d(2015, 2, 1));
    assert_eq!(weeks[3].week_end, d(2015, 2, 28));
}

#[test]
fn test_leap_february_saturday_start() {
    let weeks = calculate_weeks(d(2024, 2, 1), 7);

    assert!(weeks.iter().all(|w| w.week_start.weekday() == Weekday::Sat));
    assert!(weeks.first().unwrap().week_start <= d(2024, 2, 1));
    assert!(weeks.last().unwrap().week_end >= d(2024, 2, 29));
}

#[test]
fn test_invalid_week_start_is_clamped_to_sunday() {
    let expected = calculate_weeks(d(2024, 3, 1), 1);

    assert_eq!(calculate_weeks(d(2024, 3, 1), 0), expected);
    assert_eq!(calculate_weeks(d(2024, 3, 1), 9), expected);
    assert_eq!(calculate_weeks(d(2024, 3, 1), -3), expected);
    assert_eq!(WeekStart::from_config(42), WeekStart::SUNDAY);
}

#[test]
fn test_weeks_are_contiguous() {
    for start_day in 1..=7 {
        let weeks = calculate_weeks(d(2023, 10, 1), start_day);
        for pair in weeks.windows(2) {
            assert_eq!(pair[0].week_end.succ_opt(), Some(pair[1].week_start));
        }
    }
}

#[test]
fn test_day_numbers_follow_week_start() {
    // 2024-03-04 is a Monday
    assert_eq!(WeekStart::MONDAY.day_number_of(d(2024, 3, 4)), 1);
    assert_eq!(WeekStart::SUNDAY.day_number_of(d(2024, 3, 4)), 2);
    assert_eq!(WeekStart::from_config(7).day_number_of(d(2024, 3, 4)), 3);
    assert_eq!(WeekStart::MONDAY.day_number_of(d(2024, 3, 10)), 7);
}

#[test]
fn test_ordered_weekdays() {
    assert_eq!(
        WeekStart::MONDAY.ordered_weekdays(),
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun
        ]
    );
    assert_eq!(WeekStart::from_config(7).ordered_weekdays()[1], Weekday::Sun);
    assert_eq!(weekday_from_number(1), Weekday::Sun);
    assert_eq!(weekday_from_number(7), Weekday::Sat);
}

#[test]
fn test_month_bounds() {
    assert_eq!(month_bounds(d(2024, 2, 15)), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(month_bounds(d(2023, 12, 31)), (d(2023, 12, 1), d(2023, 12, 31)));
}

#[test]
fn test_select_week_clamps() {
    let weeks = calculate_weeks(d(2024, 3, 1), 2);

    assert_eq!(select_week(&weeks, 2).unwrap().week_num, 2);
    assert_eq!(select_week(&weeks, 0).unwrap().week_num, 1);
    assert_eq!(select_week(&weeks, 99).unwrap().week_num, 5);
    assert!(select_week(&[], 1).is_none());
}

#[test]
fn test_range_with_end_before_start_is_empty() {
    assert!(weeks_for_range(d(2024, 3, 10), d(2024, 3, 1), WeekStart::MONDAY).is_empty());
}

#[test]
fn test_calendar_edges_do_not_overflow() {
    let last = calculate_weeks(NaiveDate::MAX, 1);
    assert!(!last.is_empty());
    assert!(last.iter().all(|w| w.week_start <= NaiveDate::MAX));
    assert_eq!(
        last.iter().map(|w| w.week_num).collect::<Vec<_>>(),
        (1..=last.len() as u32).collect::<Vec<_>>()
    );

    for start_day in 1..=7 {
        for w in calculate_weeks(NaiveDate::MIN, start_day) {
            assert!(w.week_start >= NaiveDate::MIN);
        }
    }
}
