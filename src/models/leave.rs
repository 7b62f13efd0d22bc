use super::color::Rgb;
use serde::{Deserialize, Serialize};

/// Leave type as published by the record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// What a leave lookup yields for a known leave type id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveInfo {
    pub title: String,
    pub color: Option<Rgb>,
}
