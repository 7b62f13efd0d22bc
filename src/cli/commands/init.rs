use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::source::sample_dataset;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::Path;

/// Handle the `init` subcommand
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force, sample } = cmd {
        if config_path.exists() && !*force {
            info(format!(
                "Config file already present: {} (use --force to overwrite)",
                config_path.display()
            ));
        } else {
            Config::default().save_to(config_path)?;
            success(format!("Config file: {}", config_path.display()));
        }

        if let Some(sample_path) = sample {
            let path = expand_tilde(sample_path);
            write_sample(&path)?;
            success(format!("Sample dataset: {}", path.display()));
        }
    }
    Ok(())
}

fn write_sample(path: &Path) -> AppResult<()> {
    let dataset = sample_dataset();
    let content = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::to_string_pretty(&dataset)?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(&dataset)?,
        _ => {
            return Err(AppError::Dataset(
                "sample file must end in .json, .yaml or .yml".to_string(),
            ));
        }
    };

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)?;
    Ok(())
}
