//! Host side of the pipeline: owns the display, asks for access once,
//! then feeds the engine on every tick.

mod scheduler;
mod status_bar;
mod terminal;

pub use scheduler::{Schedule, run_loop};
pub use status_bar::{DisplaySurface, LOADING, MenuItem, QUIT, StatusBar, Ticket, menu_items};
pub use terminal::TerminalSurface;

use crate::core::present::{PresentationOptions, present_with};
use crate::errors::AppResult;
use crate::models::access::AccessResult;
use crate::models::presentation::PresentationResult;
use crate::models::window::{DayWindow, WindowMode};
use crate::source::EventSource;
use crate::utils::time::TimeFormatter;
use chrono::{DateTime, Local};

/// Query + present for one instant. Holds no state between calls.
pub struct Refresher<S, F> {
    pub source: S,
    pub formatter: F,
    pub options: PresentationOptions,
    pub window: WindowMode,
    pub calendars: Vec<String>,
}

impl<S: EventSource, F: TimeFormatter> Refresher<S, F> {
    pub fn new(source: S, formatter: F) -> Self {
        Self {
            source,
            formatter,
            options: PresentationOptions::default(),
            window: WindowMode::default(),
            calendars: Vec::new(),
        }
    }

    pub fn compute(&self, now: DateTime<Local>) -> AppResult<PresentationResult> {
        let window = DayWindow::for_mode(self.window, now)?;
        let events = self
            .source
            .query_events(&window.start, &window.end, &self.calendars)?;
        Ok(present_with(now, &events, &self.formatter, &self.options))
    }
}

pub struct Host<S, F, D> {
    pub refresher: Refresher<S, F>,
    pub bar: StatusBar<D>,
}

impl<S, F, D> Host<S, F, D>
where
    S: EventSource,
    F: TimeFormatter,
    D: DisplaySurface,
{
    pub fn new(refresher: Refresher<S, F>, bar: StatusBar<D>) -> Self {
        Self { refresher, bar }
    }

    /// Ask for access once. On refusal the fixed message is shown and the
    /// engine is never invoked; on success the first refresh runs right away.
    pub fn start(&mut self, now: DateTime<Local>) -> AppResult<AccessResult> {
        let access = self.refresher.source.request_access();

        if let Some(label) = access.label() {
            log::warn!("calendar access {:?}: showing '{}'", access, label);
            self.bar.show_error(label)?;
            return Ok(access);
        }

        self.tick(now)?;
        Ok(access)
    }

    /// One refresh. Returns whether the result reached the display.
    pub fn tick(&mut self, now: DateTime<Local>) -> AppResult<bool> {
        let ticket = self.bar.begin_tick();
        let result = self.refresher.compute(now)?;
        self.bar.apply(ticket, &result)
    }
}
