pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::truncate_graphemes;
pub use time::{ShortTime, TimeFormatter, TimeStyle};
