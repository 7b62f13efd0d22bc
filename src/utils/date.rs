use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Date-only parse. Accepts `YYYY-MM-DD` and any timestamp starting with it
/// (`2024-03-04T00:00:00Z`); the time-of-day part is ignored.
pub fn parse_date_only(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let head = s.get(..10)?;
    if s.len() > 10 && !s[10..].starts_with(['T', ' ', 't']) {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// First day of the month named by `YYYY-MM` (a full `YYYY-MM-DD` is accepted too).
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    let t = s.trim();

    if let Some(d) = parse_date_only(t) {
        return d
            .with_day(1)
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()));
    }

    NaiveDate::parse_from_str(&format!("{t}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

/// The current month, as its first day.
pub fn current_month() -> NaiveDate {
    let t = today();
    t.with_day(1).unwrap_or(t)
}

pub fn month_name(m: u32) -> &'static str {
    match m {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// `March 2024`.
pub fn month_title(month: NaiveDate) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}
