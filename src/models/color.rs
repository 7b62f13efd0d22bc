use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    /// Light red used for holidays unless configured otherwise.
    pub const HOLIDAY: Rgb = Rgb(0xFFC7CE);

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for Rgb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Rgb)
            .map_err(|_| AppError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFFFFFF)
    }
}

/// Fixed colors used by the resolver for the holiday and default tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub holiday: Rgb,
    pub default: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            holiday: Rgb::HOLIDAY,
            default: Rgb::WHITE,
        }
    }
}

/// Which rule decided a day's color. Declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityTier {
    Holiday,
    LeaveType,
    Default,
}

impl PriorityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::Holiday => "HOLIDAY",
            PriorityTier::LeaveType => "LEAVE_TYPE",
            PriorityTier::Default => "DEFAULT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorResolution {
    pub color: Rgb,
    pub tier: PriorityTier,
    pub reasons: Vec<String>,
}
