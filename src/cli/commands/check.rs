use crate::cli::commands::load::load_grid;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};

/// Handle the `check` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { grid: args, json } = cmd {
        let loaded = load_grid(args, cfg)?;
        let diagnostics = &loaded.grid.diagnostics;

        if *json {
            println!("{}", serde_json::to_string_pretty(diagnostics)?);
            return Ok(());
        }

        header(format!("Record check: {}", args.data));
        for line in diagnostics.summary_lines() {
            println!("{line}");
        }
        println!("quality score: {}/100", diagnostics.quality_score());

        if diagnostics.is_clean() {
            success("All records usable.");
        } else {
            warning("Some records were skipped or need a look.");
        }
    }
    Ok(())
}
