use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::source::{EventSource, SqliteEventSource};
use crate::ui::messages::info;
use crate::utils::table::Table;

/// Handle the `calendars` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendars = cmd {
        let source = SqliteEventSource::new(cfg.database_path());

        let access = source.request_access();
        if let Some(label) = access.label() {
            super::status::hint_missing_store(cfg, access);
            println!("{}", label);
            return Ok(());
        }

        let calendars = source.list_calendars()?;
        if calendars.is_empty() {
            info(format!("No calendars in {}", source.path().display()));
            return Ok(());
        }

        let mut table = Table::new(&["ID", "TITLE", "EVENTS", "SHOWN"]);
        for c in &calendars {
            let shown = cfg.calendars.is_empty()
                || cfg.calendars.iter().any(|s| *s == c.id || *s == c.title);
            table.add_row(vec![
                c.id.clone(),
                c.title.clone(),
                c.event_count.to_string(),
                if shown { "yes".into() } else { "no".into() },
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
