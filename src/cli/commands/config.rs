use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("# {}", config_path.display());
            print!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !config_path.exists() {
                cfg.save_to(config_path)?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&requested, config_path) {
                success(format!("Configuration edited with '{requested}'"));
            } else if requested != default_editor {
                warning(format!(
                    "Editor '{requested}' not available, falling back to '{default_editor}'"
                ));
                if run_editor(&default_editor, config_path) {
                    success(format!("Configuration edited with '{default_editor}'"));
                } else {
                    error(format!("Could not start '{default_editor}'"));
                }
            } else {
                error(format!("Could not start '{requested}'"));
            }
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
