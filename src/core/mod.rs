pub mod config;
pub mod present;

pub use present::{MenuScope, PresentationOptions, present, present_with};
