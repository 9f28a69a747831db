//! QuickCal library root.
//! Exposes the CLI parser, the presentation engine, the calendar sources
//! and the host adapter, plus the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod host;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Local};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, now),
        Commands::Menu => cli::commands::menu::handle(&cli.command, cfg, now),
        Commands::Watch { .. } => {
            let fixed = cli.at.as_ref().map(|_| now);
            cli::commands::watch::handle(&cli.command, cfg, fixed)
        }
        Commands::Calendars => cli::commands::calendars::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // A broken config file must not lock the user out of `config --edit`.
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            ui::messages::warning(format!("{} (showing defaults)", e));
            Config::default()
        }
        Err(e) => return Err(e),
    };
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let now = utils::date::resolve_now(cli.at.as_deref())?;
    log::debug!("evaluating at {}", now.to_rfc3339());

    dispatch(&cli, &cfg, now)
}
