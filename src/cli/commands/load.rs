//! Shared by the grid commands: dataset + config + CLI overrides → grid.

use crate::cli::parser::GridArgs;
use crate::config::Config;
use crate::core::calculator::weeks::WeekStart;
use crate::core::grid::{Grid, GridOptions};
use crate::core::logic::{Core, MonthSelection};
use crate::errors::AppResult;
use crate::source::Dataset;
use crate::utils::date::{current_month, parse_month};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

pub struct LoadedGrid {
    pub grid: Grid,
    pub month: NaiveDate,
    pub group_name: String,
}

pub fn options_from(args: &GridArgs, cfg: &Config) -> GridOptions {
    let mut options = cfg.grid_options();
    if args.no_markers {
        options.include_marker_only_days = false;
    }
    if args.calendar_holidays {
        options.include_calendar_holidays = true;
    }
    if args.hide_empty {
        options.hide_empty_rows = true;
    }
    options
}

pub fn selection_from(args: &GridArgs, cfg: &Config) -> AppResult<MonthSelection> {
    let month = match &args.month {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    let week_start = args
        .week_start
        .map(WeekStart::from_config)
        .unwrap_or_else(|| cfg.week_start());

    let selection = MonthSelection::new(month, week_start);
    Ok(match args.week {
        Some(n) => selection.only_week(n),
        None => selection,
    })
}

pub fn load_grid(args: &GridArgs, cfg: &Config) -> AppResult<LoadedGrid> {
    let dataset = Dataset::load(&expand_tilde(&args.data))?;
    let selection = selection_from(args, cfg)?;

    let records = dataset.records();
    let leaves = dataset.leave_table();
    let holidays = dataset.holiday_calendar();

    let grid = Core::build_month(
        &records,
        dataset.roster(),
        &selection,
        cfg.palette(),
        options_from(args, cfg),
        &leaves,
        &holidays,
    )?;

    let group_name = dataset
        .group_name()
        .map(str::to_string)
        .unwrap_or_else(|| cfg.group_name.clone());

    Ok(LoadedGrid {
        grid,
        month: selection.month,
        group_name,
    })
}
