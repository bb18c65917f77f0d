/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// GREY for an empty cell, RESET otherwise.
pub fn color_for_cell(value: &str) -> &'static str {
    if value.trim().is_empty() { GREY } else { RESET }
}

/// Status column color:
/// up / yes / on → green
/// down / no / off / dead → red
/// empty → grey
/// anything else (spare, repair…) → yellow
pub fn color_for_status(value: &str) -> &'static str {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => GREY,
        "up" | "yes" | "y" | "on" | "active" => GREEN,
        "down" | "no" | "n" | "off" | "dead" | "retired" => RED,
        _ => YELLOW,
    }
}
