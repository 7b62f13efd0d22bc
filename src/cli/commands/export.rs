use crate::cli::commands::load::load_grid;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, to_export_matrix};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        grid: args,
        format,
        file,
        dir,
        force,
    } = cmd
    {
        let loaded = load_grid(args, cfg)?;
        let matrix = to_export_matrix(&loaded.grid.groups, &loaded.group_name);

        let file = file.as_deref().map(expand_tilde);
        let dir = dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.export_dir_path());

        ExportLogic::export(&matrix, *format, file.as_deref(), &dir, *force)?;
    }
    Ok(())
}
