use crate::errors::AppResult;
use crate::models::presentation::PresentationResult;
use std::sync::atomic::{AtomicU64, Ordering};

pub const LOADING: &str = "Loading...";
pub const QUIT: &str = "Quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Entry(String),
    Separator,
    Quit,
}

/// The engine's entries followed by the host's separator and Quit control.
pub fn menu_items(result: &PresentationResult) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = result
        .menu_entries
        .iter()
        .map(|e| MenuItem::Entry(e.text.clone()))
        .collect();
    items.push(MenuItem::Separator);
    items.push(MenuItem::Quit);
    items
}

/// Whatever physically shows the label and the dropdown.
pub trait DisplaySurface {
    fn set_label(&mut self, label: &str) -> AppResult<()>;
    fn set_menu(&mut self, items: &[MenuItem]) -> AppResult<()>;
}

/// Proof that a refresh was started; refreshes are numbered in start order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Sole owner of the display handle.
pub struct StatusBar<D> {
    surface: D,
    started: AtomicU64,
}

impl<D: DisplaySurface> StatusBar<D> {
    pub fn new(mut surface: D) -> AppResult<Self> {
        surface.set_label(LOADING)?;
        Ok(Self {
            surface,
            started: AtomicU64::new(0),
        })
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn into_surface(self) -> D {
        self.surface
    }

    pub fn begin_tick(&self) -> Ticket {
        Ticket(self.started.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Push `result` unless a newer refresh has started since `ticket`.
    pub fn apply(&mut self, ticket: Ticket, result: &PresentationResult) -> AppResult<bool> {
        let latest = self.started.load(Ordering::SeqCst);
        if ticket.0 != latest {
            log::debug!("dropping refresh #{} (latest is #{})", ticket.0, latest);
            return Ok(false);
        }

        self.surface.set_label(&result.status_label)?;
        self.surface.set_menu(&menu_items(result))?;
        log::info!("refresh #{} applied: {}", ticket.0, result.status_label);
        Ok(true)
    }

    pub fn show_error(&mut self, message: &str) -> AppResult<()> {
        self.surface.set_label(message)
    }
}
