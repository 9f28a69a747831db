//! Formatting utilities used for terminal output and labels.

use unicode_segmentation::UnicodeSegmentation;

pub const ELLIPSIS: &str = "…";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Keep at most `max` user-perceived characters, appending "…" when cut.
/// `max == 0` disables truncation.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    if max == 0 {
        return s.to_string();
    }

    let mut graphemes = s.graphemes(true);
    let head: String = graphemes.by_ref().take(max).collect();

    if graphemes.next().is_some() {
        format!("{head}{ELLIPSIS}")
    } else {
        head
    }
}
