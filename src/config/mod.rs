use crate::core::calculator::weeks::{DEFAULT_WEEK_START_DAY, WeekStart};
use crate::core::grid::GridOptions;
use crate::errors::{AppError, AppResult};
use crate::models::color::{Palette, Rgb};
use crate::utils::path::{default_export_dir, expand_tilde};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 1 = Sunday ... 7 = Saturday.
    #[serde(default = "default_week_start_day")]
    pub week_start_day: i64,
    #[serde(default = "default_holiday_color")]
    pub holiday_color: String,
    #[serde(default = "default_background_color")]
    pub default_color: String,
    #[serde(default = "default_true")]
    pub include_marker_only_days: bool,
    #[serde(default)]
    pub include_calendar_holidays: bool,
    #[serde(default)]
    pub hide_empty_rows: bool,
    /// Used for export titles and file names when the dataset has no group.
    #[serde(default = "default_group_name")]
    pub group_name: String,
    #[serde(default = "default_export_dir_string")]
    pub export_dir: String,
}

fn default_week_start_day() -> i64 {
    DEFAULT_WEEK_START_DAY as i64
}
fn default_holiday_color() -> String {
    Rgb::HOLIDAY.to_string()
}
fn default_background_color() -> String {
    Rgb::WHITE.to_string()
}
fn default_true() -> bool {
    true
}
fn default_group_name() -> String {
    "Timetable".to_string()
}
fn default_export_dir_string() -> String {
    default_export_dir().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start_day: default_week_start_day(),
            holiday_color: default_holiday_color(),
            default_color: default_background_color(),
            include_marker_only_days: true,
            include_calendar_holidays: false,
            hide_empty_rows: false,
            group_name: default_group_name(),
            export_dir: default_export_dir_string(),
        }
    }
}

impl Config {
    /// `~/.rtimegrid`, or `./.rtimegrid` when there is no home directory.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimegrid")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimegrid.conf")
    }

    /// Missing file → defaults. Unreadable or malformed file → defaults plus
    /// a warning, so a broken config never blanks the schedule.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(AppError::from)
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content)
                    .map_err(|e| AppError::Config(e.to_string()))
            });

        match parsed {
            Ok(cfg) => cfg.sanitized(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Replaces out-of-range values with their defaults.
    pub fn sanitized(mut self) -> Self {
        if !(1..=7).contains(&self.week_start_day) {
            warn!(
                week_start_day = self.week_start_day,
                "week_start_day must be 1..=7, using default"
            );
            self.week_start_day = default_week_start_day();
        }
        if self.holiday_color.parse::<Rgb>().is_err() {
            warn!(color = %self.holiday_color, "invalid holiday_color, using default");
            self.holiday_color = default_holiday_color();
        }
        if self.default_color.parse::<Rgb>().is_err() {
            warn!(color = %self.default_color, "invalid default_color, using default");
            self.default_color = default_background_color();
        }
        if self.group_name.trim().is_empty() {
            self.group_name = default_group_name();
        }
        self
    }

    pub fn week_start(&self) -> WeekStart {
        WeekStart::from_config(self.week_start_day)
    }

    pub fn palette(&self) -> Palette {
        let fallback = Palette::default();
        Palette {
            holiday: self.holiday_color.parse().unwrap_or(fallback.holiday),
            default: self.default_color.parse().unwrap_or(fallback.default),
        }
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            include_marker_only_days: self.include_marker_only_days,
            include_calendar_holidays: self.include_calendar_holidays,
            hide_empty_rows: self.hide_empty_rows,
        }
    }

    pub fn export_dir_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
