use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::access::AccessResult;
use crate::models::presentation::PresentationResult;
use crate::source::EventSource;
use crate::ui::messages::warning;
use chrono::{DateTime, Local};

/// Handle the `status` command: one refresh, label (or JSON) to stdout.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let refresher = super::refresher(cfg);
        let access = refresher.source.request_access();

        let result = match access.label() {
            Some(label) => {
                hint_missing_store(cfg, access);
                PresentationResult {
                    status_label: label.to_string(),
                    menu_entries: Vec::new(),
                }
            }
            None => refresher.compute(now)?,
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", result.status_label);
        }
    }
    Ok(())
}

/// Point the user at `init` when the store simply does not exist yet.
pub(crate) fn hint_missing_store(cfg: &Config, access: AccessResult) {
    if access == AccessResult::Restricted {
        warning(format!(
            "Calendar store not found at {} (run `quickcal init` or pass --db)",
            cfg.database_path().display()
        ));
    }
}
