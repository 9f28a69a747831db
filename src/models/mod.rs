pub mod access;
pub mod calendar;
pub mod calendar_event;
pub mod presentation;
pub mod window;
