//! ANSI color helper utilities for terminal output.

use crate::models::color::PriorityTier;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

/// Terminal stand-in for a day's fill color.
pub fn color_for_tier(tier: PriorityTier) -> &'static str {
    match tier {
        PriorityTier::Holiday => MAGENTA,
        PriorityTier::LeaveType => YELLOW,
        PriorityTier::Default => RESET,
    }
}

/// Weekly totals: green when something was worked, grey otherwise.
pub fn color_for_total(minutes: i64) -> &'static str {
    if minutes > 0 { GREEN } else { GREY }
}

pub fn paint(value: &str, color: &str) -> String {
    if color == RESET || value.trim().is_empty() {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
