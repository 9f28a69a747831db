use serde::Serialize;

/// Outcome of asking the calendar source for read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessResult {
    Granted,
    Denied,
    Restricted,
    Unknown,
}

impl AccessResult {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessResult::Granted)
    }

    /// Fixed label shown instead of the calendar when access is missing.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AccessResult::Granted => None,
            AccessResult::Denied => Some("Access Denied"),
            AccessResult::Restricted => Some("Enable Access in System Settings"),
            AccessResult::Unknown => Some("Access Error"),
        }
    }
}
