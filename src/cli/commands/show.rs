use crate::cli::commands::load::load_grid;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::interval::format_total;
use crate::errors::AppResult;
use crate::models::week::WeekGroup;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_tier, color_for_total};
use crate::utils::date::month_title;
use crate::utils::formatting::bold;
use crate::utils::table::{Cell, Column, Table};

const STAFF_WIDTH: usize = 18;
const DAY_WIDTH: usize = 17;
const TOTAL_WIDTH: usize = 9;

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { grid: args } = cmd {
        let loaded = load_grid(args, cfg)?;

        header(format!("{} - {}", loaded.group_name, month_title(loaded.month)));

        if loaded.grid.is_empty() {
            warning("No data for the selected month.");
            return Ok(());
        }

        for group in &loaded.grid.groups {
            println!("{}", bold(&group.week.label));
            print!("{}", render_week(group));
            println!();
        }
    }
    Ok(())
}

pub fn render_week(group: &WeekGroup) -> String {
    let mut columns = vec![Column::new("Staff", STAFF_WIDTH)];
    for date in group.week.dates() {
        columns.push(Column::new(date.format("%a %d").to_string(), DAY_WIDTH));
    }
    columns.push(Column::new("Total", TOTAL_WIDTH));

    let mut table = Table::new(columns);

    for row in &group.rows {
        let mut cells = vec![Cell::plain(row.staff.name.clone())];
        for day in &row.days {
            cells.push(Cell::colored(day.text.clone(), color_for_tier(day.color.tier)));
        }
        cells.push(Cell::colored(
            format_total(row.weekly_total_minutes),
            color_for_total(row.weekly_total_minutes),
        ));
        table.add_row(cells);
    }

    table.render()
}
