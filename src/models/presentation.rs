use serde::Serialize;

/// A single line of the dropdown menu produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub text: String,
}

impl MenuEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// What the display surface should show after one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationResult {
    pub status_label: String,
    pub menu_entries: Vec<MenuEntry>,
}

impl PresentationResult {
    pub fn entry_texts(&self) -> Vec<&str> {
        self.menu_entries.iter().map(|e| e.text.as_str()).collect()
    }
}
