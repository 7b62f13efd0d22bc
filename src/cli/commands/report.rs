use crate::cli::commands::load::load_grid;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::interval::format_total;
use crate::errors::AppResult;
use crate::report::compute_stats;
use crate::ui::messages::header;
use crate::utils::date::month_title;
use crate::utils::table::{Cell, Column, Table};

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { grid: args, json } = cmd {
        let loaded = load_grid(args, cfg)?;
        let stats = compute_stats(&loaded.grid.groups, Some(&loaded.grid.diagnostics));

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        header(format!("{} - {}", loaded.group_name, month_title(loaded.month)));

        let mut table = Table::new(vec![
            Column::new("Staff", 20),
            Column::new("Worked", 10),
            Column::new("Days", 5),
            Column::new("Holiday", 8),
            Column::new("Leave", 6),
        ]);
        for s in &stats.staff {
            table.add_row(vec![
                Cell::plain(s.name.clone()),
                Cell::plain(format_total(s.total_minutes)),
                Cell::plain(s.days_worked.to_string()),
                Cell::plain(s.holiday_days.to_string()),
                Cell::plain(s.leave_days.to_string()),
            ]);
        }
        print!("{}", table.render());

        println!();
        println!("total worked:   {}", format_total(stats.total_minutes));
        println!("days with data: {}", stats.days_with_data);
        for (title, days) in &stats.leave_breakdown {
            println!("  {title}: {days} day(s)");
        }
        if let Some(score) = stats.quality_score {
            println!("quality score:  {score}/100");
        }
    }
    Ok(())
}
