pub mod calendars;
pub mod config;
pub mod init;
pub mod menu;
pub mod status;
pub mod watch;

use crate::config::Config;
use crate::host::Refresher;
use crate::source::SqliteEventSource;
use crate::utils::time::ShortTime;
use std::io::IsTerminal;

/// Build the query + present pipeline from the configuration.
pub(crate) fn refresher(cfg: &Config) -> Refresher<SqliteEventSource, ShortTime> {
    let mut r = Refresher::new(
        SqliteEventSource::new(cfg.database_path()),
        ShortTime::new(cfg.time_format),
    );
    r.options = cfg.presentation_options();
    r.window = cfg.window;
    r.calendars = cfg.calendars.clone();
    r
}

pub(crate) fn stdout_is_plain() -> bool {
    !std::io::stdout().is_terminal()
}
