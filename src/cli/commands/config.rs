use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("# {}", path.display());
            print!("{}", ConfigLogic::render(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = ConfigLogic::check(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete");
            } else {
                for field in &missing {
                    warning(format!("Missing field '{}' (default is used)", field));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }
    Ok(())
}
