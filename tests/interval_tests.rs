mod common;
use common::t;
use rtimegrid::core::calculator::interval::{
    between, duration_minutes, format_shift_label, format_total, lunch_minutes, work_minutes,
};
use rtimegrid::models::LunchBreak;

#[test]
fn test_same_day_duration() {
    assert_eq!(duration_minutes(9, 0, 17, 0), 480);
    assert_eq!(duration_minutes(8, 15, 12, 45), 270);
}

#[test]
fn test_midnight_wraparound() {
    assert_eq!(duration_minutes(22, 0, 6, 0), 480);
    assert_eq!(duration_minutes(23, 30, 0, 30), 60);
}

#[test]
fn test_end_at_midnight_counts_to_midnight() {
    assert_eq!(duration_minutes(22, 0, 0, 0), 120);
}

#[test]
fn test_zero_sentinel_is_not_a_full_day() {
    assert_eq!(duration_minutes(0, 0, 0, 0), 0);
    assert_eq!(between(t(0, 0), t(0, 0)), 0);
}

#[test]
fn test_equal_non_zero_times_wrap_a_full_day() {
    assert_eq!(duration_minutes(9, 0, 9, 0), 24 * 60);
}

#[test]
fn test_explicit_lunch_minutes_win_over_window() {
    let lunch = LunchBreak {
        minutes: Some(30),
        start: Some(t(12, 0)),
        end: Some(t(13, 0)),
    };
    assert_eq!(lunch_minutes(Some(&lunch)), 30);
}

#[test]
fn test_lunch_window_used_when_minutes_missing_or_zero() {
    let window = LunchBreak::window(t(12, 0), t(12, 45));
    assert_eq!(lunch_minutes(Some(&window)), 45);

    let zero_minutes = LunchBreak {
        minutes: Some(0),
        ..window
    };
    assert_eq!(lunch_minutes(Some(&zero_minutes)), 45);

    let across_midnight = LunchBreak::window(t(23, 30), t(0, 15));
    assert_eq!(lunch_minutes(Some(&across_midnight)), 45);
}

#[test]
fn test_zero_or_missing_lunch_is_nothing() {
    assert_eq!(lunch_minutes(None), 0);
    assert_eq!(lunch_minutes(Some(&LunchBreak::window(t(0, 0), t(0, 0)))), 0);
    assert_eq!(lunch_minutes(Some(&LunchBreak::minutes(-10))), 0);
    assert_eq!(lunch_minutes(Some(&LunchBreak::default())), 0);
}

#[test]
fn test_work_minutes_never_negative() {
    assert_eq!(work_minutes(480, 30), 450);
    assert_eq!(work_minutes(30, 60), 0);
    assert_eq!(work_minutes(0, 45), 0);
}

#[test]
fn test_format_total() {
    assert_eq!(format_total(450), "7h 30m");
    assert_eq!(format_total(0), "0h 00m");
    assert_eq!(format_total(2465), "41h 05m");
}

#[test]
fn test_format_shift_label() {
    assert_eq!(format_shift_label(t(9, 0), t(17, 0), 450), "09:00-17:00(7:30)");
    assert_eq!(format_shift_label(t(22, 0), t(6, 0), 480), "22:00-06:00(8:00)");
    assert_eq!(format_shift_label(t(7, 5), t(7, 50), 45), "07:05-07:50(0:45)");
}
