use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema::init_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (kept if it already exists)
///  - the calendar store schema (no events are written)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let conf_path = Config::config_file();

    if conf_path.exists() {
        info(format!("Config file already present: {}", conf_path.display()));
    } else {
        let written = Config::init_file(cli.db.as_deref())?;
        success(format!("Config file: {}", written.display()));
    }

    let db_path = cfg.database_path();
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;
    log::debug!("calendar schema ensured in {}", db_path.display());

    success(format!("Calendar store: {}", db_path.display()));
    Ok(())
}
