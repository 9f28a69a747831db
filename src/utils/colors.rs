/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";

/// Menu rows the user cannot act on are dimmed.
pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}

/// Wrap `value` in `color` unless output is plain.
pub fn paint(value: &str, color: &str, plain: bool) -> String {
    if plain {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
