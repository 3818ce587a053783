use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, conf_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*check && !*edit_config {
            info("Nothing to do: use --print, --check or --edit.");
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Configuration file: {}", conf_path.display()));
            let yaml = serde_yaml::to_string(cfg)?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !conf_path.exists() {
                warning(format!(
                    "No configuration file at {}: defaults in use. Run `init` to create one.",
                    conf_path.display()
                ));
            } else {
                let content = fs::read_to_string(conf_path)?;
                let missing = Config::missing_fields(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    for field in missing {
                        warning(format!("Missing field '{}' (default used)", field));
                    }
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(conf_path, editor)?;
        }
    }

    Ok(())
}

fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} does not exist, run `init` first",
            path.display()
        )));
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

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }
        _ => warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        }
        _ => {
            error(format!(
                "Failed to edit configuration file using fallback '{}'",
                default_editor
            ));
            Err(AppError::Config("no usable editor".into()))
        }
    }
}
