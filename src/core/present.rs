//! Selection & presentation policy: turns today's raw events into the
//! status label and the per-event menu entries.

use crate::models::calendar_event::CalendarEvent;
use crate::models::presentation::{MenuEntry, PresentationResult};
use crate::utils::formatting::truncate_graphemes;
use crate::utils::time::TimeFormatter;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const NO_EVENTS_TODAY: &str = "No events today";
pub const ALL_DONE: &str = "All events done for today";
pub const NO_EVENTS_ENTRY: &str = "No events";
pub const DEFAULT_TITLE_MAX_LEN: usize = 20;

/// Which events get a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuScope {
    /// Only events that have not ended yet.
    #[default]
    Upcoming,
    /// Every event of the day, ended or not.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationOptions {
    /// Status label title limit in characters; 0 disables truncation.
    pub title_max_len: usize,
    pub menu_scope: MenuScope,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            title_max_len: DEFAULT_TITLE_MAX_LEN,
            menu_scope: MenuScope::Upcoming,
        }
    }
}

/// Present today's events with the default options.
pub fn present<F: TimeFormatter>(
    now: DateTime<Local>,
    events: &[CalendarEvent],
    fmt: &F,
) -> PresentationResult {
    present_with(now, events, fmt, &PresentationOptions::default())
}

pub fn present_with<F: TimeFormatter>(
    now: DateTime<Local>,
    events: &[CalendarEvent],
    fmt: &F,
    opts: &PresentationOptions,
) -> PresentationResult {
    // `sort_by_key` is stable: equal starts keep the source order.
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.start);

    let upcoming: Vec<&CalendarEvent> = sorted
        .iter()
        .copied()
        .filter(|e| e.is_upcoming(&now))
        .collect();

    let status_label = if sorted.is_empty() {
        NO_EVENTS_TODAY.to_string()
    } else if let Some(next) = upcoming.first() {
        status_line(next, fmt, opts.title_max_len)
    } else {
        ALL_DONE.to_string()
    };

    let listed = match opts.menu_scope {
        MenuScope::Upcoming => &upcoming,
        MenuScope::All => &sorted,
    };

    let mut menu_entries: Vec<MenuEntry> = listed
        .iter()
        .map(|e| MenuEntry::new(menu_line(e, fmt)))
        .collect();

    if menu_entries.is_empty() {
        menu_entries.push(MenuEntry::new(NO_EVENTS_ENTRY));
    }

    PresentationResult {
        status_label,
        menu_entries,
    }
}

fn status_line<F: TimeFormatter>(ev: &CalendarEvent, fmt: &F, max_len: usize) -> String {
    format!(
        "{} - {}: {}",
        fmt.short_time(&ev.start),
        fmt.short_time(&ev.end),
        truncate_graphemes(ev.title_or_default(), max_len)
    )
}

fn menu_line<F: TimeFormatter>(ev: &CalendarEvent, fmt: &F) -> String {
    format!(
        "{}: {} @ {}",
        fmt.short_time(&ev.start),
        ev.title_or_default(),
        ev.location_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::ShortTime;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 14, h, m, 0).unwrap()
    }

    fn ev(start: (u32, u32), end: (u32, u32), title: Option<&str>, loc: Option<&str>) -> CalendarEvent {
        CalendarEvent::new(
            at(start.0, start.1),
            at(end.0, end.1),
            title.map(String::from),
            loc.map(String::from),
        )
    }

    #[test]
    fn empty_day() {
        let r = present(at(10, 0), &[], &ShortTime::default());
        assert_eq!(r.status_label, "No events today");
        assert_eq!(r.entry_texts(), vec!["No events"]);
    }

    #[test]
    fn past_events_are_dropped_from_menu() {
        let events = vec![
            ev((9, 0), (9, 30), Some("Standup"), None),
            ev((11, 0), (11, 30), Some("Review"), Some("Room A")),
        ];
        let r = present(at(10, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "11:00 AM - 11:30 AM: Review");
        assert_eq!(r.entry_texts(), vec!["11:00 AM: Review @ Room A"]);
    }

    #[test]
    fn everything_finished() {
        let events = vec![ev((9, 0), (9, 30), Some("A"), None)];
        let r = present(at(18, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "All events done for today");
        assert_eq!(r.entry_texts(), vec!["No events"]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let events = vec![
            ev((15, 0), (16, 0), Some("Late"), Some("HQ")),
            ev((13, 0), (14, 0), Some("Early"), None),
        ];
        let r = present(at(12, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "1:00 PM - 2:00 PM: Early");
        assert_eq!(
            r.entry_texts(),
            vec!["1:00 PM: Early @ No location", "3:00 PM: Late @ HQ"]
        );
    }

    #[test]
    fn ongoing_event_is_still_next() {
        let events = vec![
            ev((9, 30), (11, 0), Some("Workshop"), None),
            ev((10, 30), (10, 45), Some("Call"), None),
        ];
        let r = present(at(10, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "9:30 AM - 11:00 AM: Workshop");
        assert_eq!(r.menu_entries.len(), 2);
    }

    #[test]
    fn equal_starts_keep_source_order() {
        let events = vec![
            ev((14, 0), (15, 0), Some("First"), None),
            ev((14, 0), (14, 30), Some("Second"), None),
        ];
        let r = present(at(8, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "2:00 PM - 3:00 PM: First");
        assert_eq!(r.entry_texts()[1], "2:00 PM: Second @ No location");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let events = vec![ev((11, 0), (12, 0), None, None)];
        let r = present(at(10, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "11:00 AM - 12:00 PM: No title");
        assert_eq!(r.entry_texts(), vec!["11:00 AM: No title @ No location"]);
    }

    #[test]
    fn only_the_label_is_truncated() {
        let title = "Architecture review for billing";
        let events = vec![ev((11, 0), (12, 0), Some(title), Some("Room 4"))];
        let r = present(at(10, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "11:00 AM - 12:00 PM: Architecture review …");
        assert_eq!(
            r.entry_texts(),
            vec!["11:00 AM: Architecture review for billing @ Room 4"]
        );
    }

    #[test]
    fn event_ending_exactly_now_is_past() {
        let events = vec![ev((9, 0), (10, 0), Some("Sync"), None)];
        let r = present(at(10, 0), &events, &ShortTime::default());
        assert_eq!(r.status_label, "All events done for today");
    }

    #[test]
    fn all_scope_lists_finished_events() {
        let opts = PresentationOptions {
            menu_scope: MenuScope::All,
            ..Default::default()
        };
        let events = vec![
            ev((9, 0), (9, 30), Some("Standup"), None),
            ev((11, 0), (11, 30), Some("Review"), Some("Room A")),
        ];
        let r = present_with(at(10, 0), &events, &ShortTime::default(), &opts);
        assert_eq!(
            r.entry_texts(),
            vec!["9:00 AM: Standup @ No location", "11:00 AM: Review @ Room A"]
        );

        let r = present_with(at(18, 0), &events, &ShortTime::default(), &opts);
        assert_eq!(r.status_label, "All events done for today");
        assert_eq!(r.menu_entries.len(), 2);

        let r = present_with(at(18, 0), &[], &ShortTime::default(), &opts);
        assert_eq!(r.entry_texts(), vec!["No events"]);
    }

    #[test]
    fn same_input_same_output() {
        let events = vec![ev((11, 0), (11, 30), Some("Review"), None)];
        let fmt = ShortTime::default();
        assert_eq!(present(at(10, 0), &events, &fmt), present(at(10, 0), &events, &fmt));
    }
}
