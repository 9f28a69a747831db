use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::host::{DisplaySurface, TerminalSurface, menu_items};
use crate::source::EventSource;
use chrono::{DateTime, Local};

/// Handle the `menu` command: label plus the dropdown as the host shows it.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    if let Commands::Menu = cmd {
        let refresher = super::refresher(cfg);
        let stdout = std::io::stdout();
        let mut surface = TerminalSurface::new(stdout.lock(), super::stdout_is_plain());

        let access = refresher.source.request_access();
        if let Some(label) = access.label() {
            super::status::hint_missing_store(cfg, access);
            return surface.set_label(label);
        }

        let result = refresher.compute(now)?;
        surface.set_label(&result.status_label)?;
        surface.set_menu(&menu_items(&result))?;
    }
    Ok(())
}
