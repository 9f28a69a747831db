use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::host::{Host, Schedule, StatusBar, TerminalSurface, run_loop};
use crate::source::EventSource;
use chrono::{DateTime, Local};
use std::thread;

/// Handle the `watch` command: refresh now, then every interval.
///
/// With `--at` every tick is evaluated at that same instant.
pub fn handle(cmd: &Commands, cfg: &Config, at: Option<DateTime<Local>>) -> AppResult<()> {
    if let Commands::Watch { interval, ticks } = cmd {
        let secs = interval.unwrap_or(cfg.refresh_interval_secs);
        if secs == 0 {
            return Err(AppError::Config("--interval must be greater than zero".into()));
        }

        let schedule = Schedule {
            max_ticks: *ticks,
            ..Schedule::every_secs(secs)
        };

        let stdout = std::io::stdout();
        let surface = TerminalSurface::new(stdout.lock(), super::stdout_is_plain());
        let mut host = Host::new(super::refresher(cfg), StatusBar::new(surface)?);

        let done = run_loop(
            &mut host,
            &schedule,
            || at.unwrap_or_else(Local::now),
            thread::sleep,
        )?;

        if done == 0 {
            let access = host.refresher.source.request_access();
            super::status::hint_missing_store(cfg, access);
        }
        log::debug!("watch finished after {} refresh(es)", done);
    }
    Ok(())
}
